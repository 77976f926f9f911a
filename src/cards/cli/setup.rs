use cards::model::CardState;
use clap::{Args, Parser, Subcommand};

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cards", bin_name = "cards", version = get_version())]
#[command(about = "Track small units of work as cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a card to the db
    Add {
        /// Summary words, joined with spaces
        summary: Vec<String>,

        #[arg(short, long)]
        owner: Option<String>,
    },

    /// Remove a card from the db by id
    #[command(alias = "rm")]
    Delete { card_id: u64 },

    /// List cards in the db
    #[command(alias = "ls")]
    List(ListArgs),

    /// Modify a card in the db with the given id
    Update {
        card_id: u64,

        #[arg(short, long)]
        owner: Option<String>,

        /// New summary words, joined with spaces
        #[arg(long, num_args = 1..)]
        summary: Option<Vec<String>>,

        #[arg(short, long, value_parser = parse_state)]
        state: Option<CardState>,
    },

    /// Print the directory holding the db
    Path,

    /// Print the number of cards in the db
    Count,

    /// Print the version
    Version,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only cards without an owner
    #[arg(short = 'n', long = "no-owner", visible_alias = "noowner")]
    pub no_owner: bool,

    #[arg(short, long)]
    pub owner: Option<String>,

    #[arg(short, long, value_parser = parse_state)]
    pub state: Option<CardState>,
}

fn parse_state(s: &str) -> Result<CardState, String> {
    s.parse::<CardState>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cards").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn add_collects_words_and_owner() {
        match parse(&["add", "do", "something", "-o", "okken"]).command {
            Some(Commands::Add { summary, owner }) => {
                assert_eq!(summary, vec!["do", "something"]);
                assert_eq!(owner.as_deref(), Some("okken"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn list_accepts_every_no_owner_spelling() {
        for flag in ["-n", "--no-owner", "--noowner"] {
            match parse(&["list", flag]).command {
                Some(Commands::List(args)) => assert!(args.no_owner, "{}", flag),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn list_parses_state() {
        match parse(&["ls", "-s", "in prog"]).command {
            Some(Commands::List(args)) => assert_eq!(args.state, Some(CardState::InProgress)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_state_is_rejected() {
        let err = Cli::try_parse_from(["cards", "list", "-s", "blocked"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn update_short_s_is_state() {
        match parse(&["update", "1", "-s", "done", "--summary", "new", "words"]).command {
            Some(Commands::Update {
                card_id,
                owner,
                summary,
                state,
            }) => {
                assert_eq!(card_id, 1);
                assert_eq!(owner, None);
                assert_eq!(summary, Some(vec!["new".to_string(), "words".to_string()]));
                assert_eq!(state, Some(CardState::Done));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_verbose_after_subcommand() {
        assert!(parse(&["count", "-v"]).verbose);
    }
}
