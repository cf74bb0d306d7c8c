//! # Page Commands
//!
//! Static pages and the navigation bar.

use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// Every page reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Products,
    Cart,
    About,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [Page::Home, Page::Products, Page::Cart, Page::About, Page::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::Cart => "Cart",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Shell command that opens the page.
    pub fn command(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::Cart => "cart",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }
}

/// Renders the navigation bar, marking the current page.
///
/// ```text
/// Storefront | [Home]  Products  Cart (3)  About  Contact
/// ```
pub fn nav_bar(config: &ConfigState, current: Page, cart_quantity: u32) -> String {
    let mut bar = format!("{} |", config.store_name);
    for page in Page::ALL {
        let label = if page == Page::Cart && cart_quantity > 0 {
            format!("{} ({})", page.title(), cart_quantity)
        } else {
            page.title().to_string()
        };

        if page == current {
            bar.push_str(&format!(" [{}]", label));
        } else {
            bar.push_str(&format!("  {} ", label));
        }
    }
    bar.trim_end().to_string()
}

/// Text of a static page. `None` for pages with live content.
pub fn static_page(config: &ConfigState, page: Page) -> Option<String> {
    debug!(page = ?page, "static_page command");
    let text = match page {
        Page::Home => format!(
            "Welcome to {}!\n\
             Browse the collection with `products`, or look for something\n\
             specific with `search <words>`. Prices are in {}.",
            config.store_name, config.currency_symbol
        ),
        Page::About => format!(
            "About {}\n\
             We are a small shop selling everyday clothing and accessories.\n\
             Every order is packed by hand and ships within two days.",
            config.store_name
        ),
        Page::Contact => "Contact us\n\
             Send a message with:\n  \
             send <name> | <email> | <subject> | <message>"
            .to_string(),
        Page::Products | Page::Cart => return None,
    };
    Some(text)
}
