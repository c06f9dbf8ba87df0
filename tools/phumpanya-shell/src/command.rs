//! Line commands accepted by the interactive shell.

use anyhow::{anyhow, bail, Context, Result};

use phumpanya_common::filter::SortMode;
use phumpanya_common::navigation::Page;
use phumpanya_common::product::{ProductCategory, ProductId};
use phumpanya_common::session::Action;
use phumpanya_common::toast::ToastId;

pub const HELP: &str = "\
commands:
  home | list | stories | about | cart
  search <query>          clear-search
  category <label>        toggle-category <label>
  toggle-province <name>  sort default|price-asc|price-desc
  show <id>  back  quick <id>  close-quick
  add <id> [qty]  set <id> <qty>  remove <id>  checkout
  toasts  dismiss <id>  help  quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    ListToasts,
    Help,
    Quit,
}

/// Parse one line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match word {
        "home" => navigate(Page::Home),
        "list" => navigate(Page::Listing),
        "stories" => navigate(Page::Stories),
        "about" => navigate(Page::About),
        "cart" => navigate(Page::Cart),
        "search" => Action::Search {
            query: required(rest, "search <query>")?.to_string(),
        },
        "clear-search" => Action::ClearSearch,
        "category" => Action::SelectCategory {
            category: category(rest)?,
        },
        "toggle-category" => Action::ToggleCategory {
            category: category(rest)?,
        },
        "toggle-province" => Action::ToggleProvince {
            province: required(rest, "toggle-province <name>")?.to_string(),
        },
        "sort" => Action::SetSort {
            sort: required(rest, "sort <mode>")?
                .parse::<SortMode>()
                .map_err(|e| anyhow!(e))?,
        },
        "show" => Action::SelectProduct {
            product_id: product_id(rest)?,
        },
        "back" => Action::BackToList,
        "quick" => Action::OpenQuickView {
            product_id: product_id(rest)?,
        },
        "close-quick" => Action::CloseQuickView,
        "add" => {
            let mut args = rest.split_whitespace();
            let product_id = product_id(args.next().unwrap_or(""))?;
            let quantity = match args.next() {
                Some(raw) => raw
                    .parse::<u32>()
                    .with_context(|| format!("invalid quantity '{raw}'"))?,
                None => 1,
            };
            Action::AddToCart { product_id, quantity }
        }
        "set" => {
            let mut args = rest.split_whitespace();
            let product_id = product_id(args.next().unwrap_or(""))?;
            let raw = required(args.next().unwrap_or(""), "set <id> <qty>")?;
            let quantity = raw
                .parse::<i64>()
                .with_context(|| format!("invalid quantity '{raw}'"))?;
            Action::UpdateQuantity { product_id, quantity }
        }
        "remove" => Action::RemoveFromCart {
            product_id: product_id(rest)?,
        },
        "checkout" => Action::Checkout,
        "dismiss" => {
            let raw = required(rest, "dismiss <id>")?;
            let id: ToastId = raw
                .parse()
                .with_context(|| format!("invalid toast id '{raw}'"))?;
            Action::DismissToast { id }
        }
        "toasts" => return Ok(Some(Command::ListToasts)),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(Some(Command::Dispatch(action)))
}

fn navigate(page: Page) -> Action {
    Action::Navigate { page }
}

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str> {
    if arg.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(arg)
}

fn category(arg: &str) -> Result<ProductCategory> {
    let label = required(arg, "category <label>")?;
    ProductCategory::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = ProductCategory::all().iter().map(|c| c.label()).collect();
        anyhow!("unknown category '{label}' (one of: {})", known.join(", "))
    })
}

fn product_id(arg: &str) -> Result<ProductId> {
    let raw = required(arg, "<product id>")?;
    raw.parse::<u32>()
        .map(ProductId)
        .with_context(|| format!("invalid product id '{raw}'"))
}
