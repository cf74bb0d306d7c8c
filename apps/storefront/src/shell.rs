//! # Shell
//!
//! Line-oriented front end: reads one command per line, dispatches it to
//! `commands/`, and renders the result as text.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shell Loop                                           │
//! │                                                                         │
//! │   stdin line ──► Command::parse ──► Shell::dispatch ──► Reply           │
//! │                        │                   │                │           │
//! │                   UNKNOWN_COMMAND     commands::*          text         │
//! │                                            │               alert ──►    │
//! │                                        ApiError        "press Enter"    │
//! │                                                                         │
//! │   A domain error never ends the loop; only `quit` or end of input do.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::sync::Arc;

use storefront_core::{Bill, ContactForm};
use storefront_services::EmailSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::commands::{self, CartResponse, Page, ProductDto};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

pub const HELP: &str = "\
Commands:
  home | products | cart | about | contact   open a page
  search <words>                             search for products
  reset                                      back to the default products
  add <id>                                   add a product to the cart
  inc <id> | dec <id>                        change a cart quantity by one
  bill                                       generate the bill
  clear                                      empty the cart
  send <name> | <email> | <subject> | <message>
                                             send the contact form
  help                                       show this help
  quit                                       leave the shop";

// =============================================================================
// Command Parsing
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(Page),
    Search(String),
    Reset,
    Add(String),
    Increment(String),
    Decrement(String),
    Bill,
    Clear,
    Send(ContactForm),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "home" => Command::Open(Page::Home),
            "products" => Command::Open(Page::Products),
            "cart" => Command::Open(Page::Cart),
            "about" => Command::Open(Page::About),
            "contact" => Command::Open(Page::Contact),
            "search" => Command::Search(argument("search <words>", rest)?),
            "reset" => Command::Reset,
            "add" => Command::Add(argument("add <id>", rest)?),
            "inc" | "+" => Command::Increment(argument("inc <id>", rest)?),
            "dec" | "-" => Command::Decrement(argument("dec <id>", rest)?),
            "bill" => Command::Bill,
            "clear" => Command::Clear,
            "send" => Command::Send(contact_form(rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::unknown_command(format!(
                    "Unknown command '{}'. Type `help` for the list.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn argument(usage: &str, rest: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        return Err(ApiError::unknown_command(format!("Usage: {}", usage)));
    }
    Ok(rest.to_string())
}

fn contact_form(rest: &str) -> Result<ContactForm, ApiError> {
    let parts: Vec<&str> = rest.splitn(4, '|').map(str::trim).collect();
    match parts.as_slice() {
        [name, email, subject, message] => Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }),
        _ => Err(ApiError::unknown_command(
            "Usage: send <name> | <email> | <subject> | <message>",
        )),
    }
}

// =============================================================================
// Reply
// =============================================================================

/// What the shell prints for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,

    /// Blocking notification; the loop waits for Enter after showing it
    pub alert: Option<String>,

    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            ..Default::default()
        }
    }

    fn quit() -> Self {
        Reply {
            text: "Goodbye!".to_string(),
            quit: true,
            ..Default::default()
        }
    }
}

impl From<ApiError> for Reply {
    fn from(err: ApiError) -> Self {
        if err.is_blocking() {
            Reply {
                alert: Some(err.message),
                ..Default::default()
            }
        } else {
            Reply::text(format!("error: {}", err.message))
        }
    }
}

/// Boxes an alert so it stands out from page text.
pub fn alert_box(message: &str) -> String {
    let width = message.chars().count() + 4;
    let rule = "─".repeat(width);
    format!("┌{rule}┐\n│  {message}  │\n└{rule}┘")
}

// =============================================================================
// Shell
// =============================================================================

pub struct Shell {
    cart: CartState,
    catalog: CatalogState,
    config: ConfigState,
    email: Arc<dyn EmailSender>,
}

impl Shell {
    pub fn new(
        cart: CartState,
        catalog: CatalogState,
        config: ConfigState,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Shell {
            cart,
            catalog,
            config,
            email,
        }
    }

    /// Runs one input line.
    pub async fn execute(&self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::default(),
            Err(e) => return e.into(),
        };

        debug!(?command, "Dispatching");
        match self.dispatch(command).await {
            Ok(reply) => reply,
            Err(e) => e.into(),
        }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "{}", self.open(Page::Home).await.text)?;
        writeln!(out, "Type `help` for commands.")?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let reply = self.execute(&line).await;
            if let Some(alert) = &reply.alert {
                writeln!(out, "{}", alert_box(alert))?;
                write!(out, "(press Enter to continue)")?;
                out.flush()?;
                if lines.next_line().await?.is_none() {
                    break;
                }
            }
            if !reply.text.is_empty() {
                writeln!(out, "{}", reply.text)?;
            }
            if reply.quit {
                break;
            }
        }

        Ok(())
    }

    async fn dispatch(&self, command: Command) -> Result<Reply, ApiError> {
        let reply = match command {
            Command::Open(page) => self.open(page).await,
            Command::Search(query) => {
                let products = commands::search_products(&self.catalog, &query).await;
                self.products_page(&products)
            }
            Command::Reset => {
                let products = commands::reset_products(&self.catalog).await;
                self.products_page(&products)
            }
            Command::Add(id) => {
                let cart = commands::add_to_cart(&self.catalog, &self.cart, &id).await?;
                self.cart_page(&cart)
            }
            Command::Increment(id) => self.cart_page(&commands::increment_item(&self.cart, &id)?),
            Command::Decrement(id) => self.cart_page(&commands::decrement_item(&self.cart, &id)?),
            Command::Bill => self.bill_page(&commands::generate_bill(&self.cart)),
            Command::Clear => self.cart_page(&commands::clear_cart(&self.cart)),
            Command::Send(form) => {
                let response = commands::submit_contact(self.email.as_ref(), &form).await?;
                Reply::text(response.message)
            }
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply::quit(),
        };
        Ok(reply)
    }

    async fn open(&self, page: Page) -> Reply {
        match page {
            Page::Products => {
                let products = commands::list_products(&self.catalog).await;
                self.products_page(&products)
            }
            Page::Cart => self.cart_page(&commands::get_cart(&self.cart)),
            _ => {
                let body = commands::static_page(&self.config, page).unwrap_or_default();
                Reply::text(format!("{}\n\n{}", self.nav(page), body))
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn nav(&self, page: Page) -> String {
        let quantity = self.cart.with_cart(|c| c.total_quantity());
        commands::nav_bar(&self.config, page, quantity)
    }

    fn products_page(&self, products: &[ProductDto]) -> Reply {
        let mut text = format!("{}\n\n", self.nav(Page::Products));
        for p in products {
            text.push_str(&format!(
                "  {:<8} {:<28} {:>12}\n",
                p.id,
                p.name,
                self.config.format_money(p.price)
            ));
        }
        text.push_str("\n`add <id>` to put a product in your cart.");
        Reply::text(text)
    }

    fn cart_page(&self, cart: &CartResponse) -> Reply {
        let mut text = format!("{}\n\n", self.nav(Page::Cart));
        if cart.is_empty() {
            text.push_str("Your cart is empty.");
            return Reply::text(text);
        }

        for line in &cart.lines {
            let dec = if line.can_decrement { "[-]" } else { "[ ]" };
            let inc = if line.can_increment { "[+]" } else { "[ ]" };
            text.push_str(&format!(
                "  {:<8} {:<28} {:>10} {} {:>2} {} {:>12}\n",
                line.product_id,
                line.name,
                self.config.format_money(line.unit_price),
                dec,
                line.quantity,
                inc,
                self.config.format_money(line.line_total),
            ));
        }
        text.push_str("\n`inc <id>` / `dec <id>` to change quantities, `bill` to check out.");
        Reply::text(text)
    }

    fn bill_page(&self, bill: &Bill) -> Reply {
        let mut text = format!("{}\n\n", self.nav(Page::Cart));
        if bill.is_empty() {
            text.push_str("Your cart is empty. There is nothing to bill.");
            return Reply::text(text);
        }

        text.push_str(&format!(
            "BILL  {}\n",
            bill.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        for line in &bill.lines {
            text.push_str(&format!(
                "  {:<28} x{:<2} {:>12}\n",
                line.product.name(),
                line.quantity,
                self.config.format_money(line.line_total),
            ));
        }
        text.push_str(&format!(
            "  {:<28} {:>16}",
            "TOTAL",
            self.config.format_money(bill.grand_total)
        ));
        Reply::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use storefront_core::{FixedPriceSource, Money};
    use storefront_services::{
        CatalogSource, ImageSearch, MemorySessionStore, ServiceResult, UnavailableSearch,
    };

    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<ContactForm>>,
    }

    #[async_trait]
    impl EmailSender for Outbox {
        async fn send_contact(&self, form: &ContactForm) -> ServiceResult<()> {
            self.sent.lock().unwrap().push(form.clone());
            Ok(())
        }
    }

    struct TwoResults;

    #[async_trait]
    impl ImageSearch for TwoResults {
        async fn search_thumbnails(&self, _query: &str) -> ServiceResult<Vec<String>> {
            Ok(vec!["a.jpg".into(), "b.jpg".into()])
        }
    }

    fn shell_with(search: Arc<dyn ImageSearch>, outbox: Arc<Outbox>) -> Shell {
        let catalog = CatalogState::new(CatalogSource::new(
            search,
            Arc::new(MemorySessionStore::new()),
            Box::new(FixedPriceSource(Money::from_major(600))),
        ));
        let config = ConfigState {
            store_name: "Shop".to_string(),
            currency_symbol: "₹".to_string(),
        };
        Shell::new(CartState::new(), catalog, config, outbox)
    }

    fn shell() -> Shell {
        shell_with(Arc::new(UnavailableSearch), Arc::new(Outbox::default()))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("CART").unwrap(), Some(Command::Open(Page::Cart)));
        assert_eq!(
            Command::parse("search  red shoes ").unwrap(),
            Some(Command::Search("red shoes".to_string()))
        );
        assert_eq!(
            Command::parse("inc p-1").unwrap(),
            Some(Command::Increment("p-1".to_string()))
        );
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("dance").is_err());
        assert!(Command::parse("send Ada | ada@example.com").is_err());
    }

    #[test]
    fn test_parse_send_keeps_pipes_in_message() {
        let command = Command::parse("send Ada | ada@example.com | Hi | a | b").unwrap();
        match command {
            Some(Command::Send(form)) => {
                assert_eq!(form.name, "Ada");
                assert_eq!(form.subject, "Hi");
                assert_eq!(form.message, "a | b");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_and_bill() {
        let shell = shell();

        shell.execute("add p-1").await;
        shell.execute("add p-2").await;
        let reply = shell.execute("bill").await;

        assert!(reply.text.contains("BILL"));
        assert!(reply.text.contains("TOTAL"));
        assert!(reply.alert.is_none());
    }

    #[tokio::test]
    async fn test_empty_cart_and_bill() {
        let shell = shell();
        assert!(shell.execute("cart").await.text.contains("Your cart is empty."));
        assert!(shell.execute("bill").await.text.contains("nothing to bill"));
    }

    #[tokio::test]
    async fn test_limit_is_an_alert() {
        let shell = shell();
        shell.execute("add p-1").await;
        for _ in 0..4 {
            assert!(shell.execute("inc p-1").await.alert.is_none());
        }

        let reply = shell.execute("inc p-1").await;
        assert!(reply.alert.is_some());
        assert!(reply.text.is_empty());
    }

    #[tokio::test]
    async fn test_inline_errors_do_not_alert() {
        let shell = shell();
        let reply = shell.execute("dec p-9").await;
        assert!(reply.alert.is_none());
        assert!(reply.text.starts_with("error:"));
    }

    #[tokio::test]
    async fn test_search_then_add_result() {
        let shell = shell_with(Arc::new(TwoResults), Arc::new(Outbox::default()));

        let reply = shell.execute("search shoes").await;
        assert!(reply.text.contains("api-1"));
        assert!(reply.text.contains("₹600.00"));

        let reply = shell.execute("add api-1").await;
        assert!(reply.text.contains("[Cart (1)]"));
    }

    #[tokio::test]
    async fn test_send_contact() {
        let outbox = Arc::new(Outbox::default());
        let shell = shell_with(Arc::new(UnavailableSearch), outbox.clone());

        let reply = shell
            .execute("send Ada | ada@example.com | Order | Where is my tee?")
            .await;
        assert!(reply.text.contains("Thanks, Ada"));
        assert_eq!(outbox.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_loop_waits_after_alert() {
        let shell = shell();
        let input: &[u8] =
            b"add p-1\ninc p-1\ninc p-1\ninc p-1\ninc p-1\ninc p-1\n\ncart\nquit\nhelp\n";
        let mut out = Vec::new();

        shell.run(input, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Welcome to Shop!"));
        assert!(out.contains("You can add at most 5"));
        assert!(out.contains("(press Enter to continue)"));
        assert!(out.contains("Goodbye!"));
        // Stopped at quit
        assert!(!out.contains("Commands:"));
    }
}
