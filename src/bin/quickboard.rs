use anyhow::{Context, Result};
use clap::Parser;
use quickboard_core::{
    provider::{HttpDataProvider, StaticDataProvider},
    storage::FileSettingsStore,
    BoardConfig, BoardSession, BoardView, DataProvider, GroupBy, OrderBy,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the ticket board grouped into columns
#[derive(Parser, Debug)]
#[command(name = "quickboard")]
struct Args {
    /// Group tickets by status, user or priority (saved for next time)
    #[arg(long)]
    group_by: Option<GroupBy>,
    /// Order tickets by priority or title (saved for next time)
    #[arg(long)]
    order_by: Option<OrderBy>,
    /// Board API endpoint, overrides QUICKBOARD_API_URL
    #[arg(long)]
    api_url: Option<String>,
    /// Read tickets and users from a JSON file instead of the API
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Directory holding the saved display settings, overrides QUICKBOARD_HOME
    #[arg(long)]
    home: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = BoardConfig::from_env().context("invalid environment configuration")?;
    if let Some(url) = args.api_url.clone() {
        config.api_url = url;
    }
    if let Some(home) = args.home.clone() {
        config.data_dir = home;
    }
    let config = config.validate().context("invalid --api-url")?;

    let store = FileSettingsStore::new(&config.data_dir);
    match args.data_file.clone() {
        Some(path) => run(StaticDataProvider::from_file(path), store, &args).await,
        None => {
            let provider = HttpDataProvider::new(config.api_url.clone())
                .context("failed to build HTTP client")?;
            run(provider, store, &args).await
        }
    }
}

async fn run<P: DataProvider>(provider: P, store: FileSettingsStore, args: &Args) -> Result<()> {
    let mut session = BoardSession::open(provider, store)
        .await
        .context("failed to open board")?;

    if let Some(group_by) = args.group_by {
        session.set_group_by(group_by).await?;
    }
    if let Some(order_by) = args.order_by {
        session.set_order_by(order_by).await?;
    }

    session
        .refresh()
        .await
        .context("failed to fetch board data")?;
    let board = session.board_view().context("failed to build board")?;

    print!("{}", render(&board));
    Ok(())
}

fn render(board: &BoardView) -> String {
    let mut out = String::new();
    for column in &board.columns {
        out.push_str(&format!("{} {}\n", column.label, column.count));
        for card in &column.cards {
            let avatar = card
                .assignee_initial
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "  {:<8} [{}] {} {}  {} {}\n",
                card.id.as_str(), avatar, card.status_icon, card.title, card.priority_icon, card.tag
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickboard_core::{ColumnView, TicketCard, TicketId};

    fn card(id: &str, initial: Option<char>, title: &str) -> TicketCard {
        TicketCard {
            id: TicketId::new(id),
            assignee_initial: initial,
            assignee_available: false,
            status_icon: "⭕",
            title: title.to_string(),
            priority_icon: "🔴",
            tag: "Feature Request".to_string(),
        }
    }

    #[test]
    fn test_render_columns_and_cards() {
        let board = BoardView {
            columns: vec![
                ColumnView {
                    label: "Todo".to_string(),
                    count: 2,
                    cards: vec![
                        card("CAM-1", Some('A'), "Update profile"),
                        card("CAM-12", None, "Fix login"),
                    ],
                },
                ColumnView {
                    label: "Done".to_string(),
                    count: 0,
                    cards: Vec::new(),
                },
            ],
        };

        let expected = "Todo 2\n\
                        \x20 CAM-1    [A] ⭕ Update profile  🔴 Feature Request\n\
                        \x20 CAM-12   [-] ⭕ Fix login  🔴 Feature Request\n\
                        \n\
                        Done 0\n\
                        \n";
        assert_eq!(render(&board), expected);
    }

    #[test]
    fn test_render_empty_board() {
        assert_eq!(render(&BoardView::default()), "");
    }
}
