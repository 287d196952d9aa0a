//! Interactive terminal loop.
//!
//! Prompts with `dialoguer`, forwards each choice to the [`Storefront`] and
//! redraws the cart after every action. Refusals caused by the user are
//! printed as warnings and the loop carries on; anything else ends it.

use crate::storefront::{Storefront, StorefrontError};
use crate::view;
use anyhow::Result;
use cart_core::ProductId;
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Input, Select};

static CART: Emoji<'_, '_> = Emoji("🛒 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "! ");
static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddToCart,
    RemoveSelected,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [
        MenuAction::AddToCart,
        MenuAction::RemoveSelected,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::AddToCart => "Add to Cart",
            MenuAction::RemoveSelected => "Remove Selected",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Run the storefront until the user exits
pub fn run(storefront: &mut Storefront, title: &str) -> Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    println!("{}{}", CART, style(title).bold().cyan());
    println!();
    println!("{}", style("Available Products").bold());
    println!("{}", view::product_table(storefront.catalog()));
    render_cart(storefront);

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact_opt()?
            .and_then(|i| MenuAction::ALL.get(i).copied())
            .unwrap_or(MenuAction::Exit);

        let outcome = match action {
            MenuAction::AddToCart => add_to_cart(storefront, &theme)?,
            MenuAction::RemoveSelected => remove_from_cart(storefront, &theme)?,
            MenuAction::Exit => break,
        };

        match into_warning(outcome)? {
            None => render_cart(storefront),
            Some(err) => show_warning(&err),
        }
    }

    println!("{}Bye!", WAVE);
    Ok(())
}

/// Keep user errors as warnings; anything else ends the session
fn into_warning(outcome: Result<(), StorefrontError>) -> Result<Option<StorefrontError>> {
    match outcome {
        Ok(()) => Ok(None),
        Err(err) if err.is_user_error() => Ok(Some(err)),
        Err(err) => Err(anyhow::Error::new(err).context("Storefront action failed")),
    }
}

/// Outer `Result` is terminal I/O; inner is the storefront's verdict
fn add_to_cart(
    storefront: &mut Storefront,
    theme: &ColorfulTheme,
) -> Result<Result<(), StorefrontError>> {
    let products = storefront.catalog().list_products();
    if products.is_empty() {
        return Ok(storefront.add_to_cart(None, ""));
    }
    let choices: Vec<_> = products.iter().map(|p| view::product_choice(p)).collect();

    let selection: Option<ProductId> = Select::with_theme(theme)
        .with_prompt("Select a product (Esc for none)")
        .items(&choices)
        .default(0)
        .interact_opt()?
        .and_then(|i| products.get(i))
        .map(|p| p.id);

    if selection.is_none() {
        return Ok(storefront.add_to_cart(None, ""));
    }

    let quantity: String = Input::with_theme(theme)
        .with_prompt("Quantity")
        .default("1".to_string())
        .interact_text()?;

    Ok(storefront.add_to_cart(selection, &quantity))
}

fn remove_from_cart(
    storefront: &mut Storefront,
    theme: &ColorfulTheme,
) -> Result<Result<(), StorefrontError>> {
    let lines = storefront.cart().line_items();

    let selection: Option<ProductId> = if lines.is_empty() {
        None
    } else {
        let choices: Vec<_> = lines.iter().map(view::cart_choice).collect();
        Select::with_theme(theme)
            .with_prompt("Select an item to remove (Esc for none)")
            .items(&choices)
            .default(0)
            .interact_opt()?
            .and_then(|i| lines.get(i))
            .map(|line| line.product_id())
    };

    Ok(storefront.remove_from_cart(selection).map(|_| ()))
}

fn render_cart(storefront: &Storefront) {
    println!("{}", style("Your Cart").bold());
    println!("{}", view::cart_table(storefront.cart()));
    println!("{}", style(view::total_label(storefront.cart())).bold().green());
    println!();
}

fn show_warning(err: &StorefrontError) {
    println!(
        "{}{}: {}",
        WARNING,
        style(err.title()).yellow().bold(),
        style(err.message()).yellow()
    );
    println!();
}
