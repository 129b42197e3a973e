use {
  action::Action,
  anyhow::Context,
  app::App,
  arguments::Arguments,
  body_format::BodyFormat,
  clap::Parser,
  client::{Authentication, Client},
  config::{Config, FeedConfig, MutationConfig},
  confirm::Confirm,
  contact_form::ContactForm,
  contact_view::ContactView,
  container::Container,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  element::Element,
  error::FetchError,
  event::{Event, Operation},
  feed::{Feed, Inputs, Mutation, View},
  futures::future::join_all,
  help_view::HelpView,
  item::Item,
  list_view::ListView,
  mode::Mode,
  parameter::Parameter,
  prompt::{Prompt, PromptTarget},
  random_choice::RandomChoice,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem,
      ListState, Paragraph, Tabs, Wrap,
    },
  },
  regex::Regex,
  request::{Method, Request},
  response::Response,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fmt, fs,
    future::Future,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::{LazyLock, Mutex},
    time::{Duration, Instant},
  },
  tab::Tab,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  transport::{HttpTransport, Transport},
  utils::{
    centered_area, format_votes, search_link, strip_tags, truncate, wrap_text,
  },
};

mod action;
mod app;
mod arguments;
mod body_format;
mod client;
mod config;
mod confirm;
mod contact_form;
mod contact_view;
mod container;
mod dispatch;
mod effect;
mod element;
mod error;
mod event;
mod feed;
mod help_view;
mod item;
mod list_view;
mod logging;
mod mode;
mod parameter;
mod prompt;
mod random_choice;
mod request;
mod response;
mod state;
mod tab;
mod transient_message;
mod transport;
mod utils;

#[cfg(test)]
mod test_transport;

const LIST_STATUS: &str = "↑/k up • ↓/j down • r refresh • n limit • d delete • o open • c contact • q quit • ? help";

const CONTACT_STATUS: &str =
  "tab next field • shift+tab previous field • enter send • esc cancel";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  home    jump to first item
  end     jump to last item

Actions:
  r       refresh the current tab
  n       set how many items to request
  g       set the filter (e.g. language code)
  d       delete (all comments, or the selected message)
  +       endorse the selected skill
  o       open the selected item's link in your browser
  a       open the login/logout page
  u       fetch an image upload URL
  c       write a message with the contact form
  f       feeling lucky: open a random blog post
  q       quit folio
  esc     close help or quit
  ?       toggle this help

Contact form:
  tab       next field
  shift+tab previous field
  enter     validate and send
  esc       discard the form
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let config = Config::load(&arguments).context("could not load config")?;

  logging::initialize(&config, arguments.log_file.as_deref())
    .context("could not initialize logging")?;

  tracing::info!(base_url = %config.base_url, "starting folio");

  let client = Client::new(HttpTransport::new(config.base_url()?))
    .with_contact_path(&config.contact_path);

  let feeds = config
    .feeds
    .iter()
    .map(Feed::try_from)
    .collect::<Result<Vec<_>>>()
    .context("invalid feed configuration")?;

  let tabs = App::load_tabs(&client, feeds).await;

  let authentication = match client.authentication().await {
    Ok(authentication) => Some(authentication),
    Err(error) => {
      tracing::warn!(%error, "could not fetch authentication url");
      None
    }
  };

  let mut app = App::new(client, &config, tabs, authentication)?;

  let mut terminal = initialize_terminal()?;

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    tracing::error!(%error, "folio exited with an error");

    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
