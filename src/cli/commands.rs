use clap::{Parser, Subcommand};
use postcraft::card::CardType;
use std::path::PathBuf;

/// `postcraft` - social media posts and cards for non-profits.
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(version)]
#[command(about = "Generate social media posts and visual cards for non-profits.", long_about = None)]
pub struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.postcraft/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a post from command-line parameters
    Generate {
        /// Goal, e.g. attract_volunteers, find_sponsors, announce_event
        #[arg(long)]
        goal: String,

        /// Target audience tags (repeatable)
        #[arg(long, required = true, num_args = 1..)]
        audience: Vec<String>,

        /// Platform: vk, telegram, website, instagram
        #[arg(long)]
        platform: String,

        /// Content format tags (repeatable)
        #[arg(long = "format", required = true, num_args = 1..)]
        formats: Vec<String>,

        /// Volume: short, medium, long
        #[arg(long, default_value = "medium")]
        volume: String,

        /// Event detail as key=value (repeatable); marks the post as an event
        #[arg(long = "event", value_parser = parse_key_value)]
        event: Vec<(String, String)>,

        /// Notes to build the post around
        #[arg(short, long, default_value = "")]
        text: String,

        /// Organisation name used in the prompt and on the card
        #[arg(long)]
        org: Option<String>,

        /// Also render a card to this PNG file
        #[arg(long)]
        card: Option<PathBuf>,

        /// Card layout: post, story, square, og
        #[arg(long, default_value_t = CardType::Post)]
        card_type: CardType,
    },

    /// Answer a questionnaire interactively, then generate
    Wizard {
        /// Also render a card to this PNG file
        #[arg(long)]
        card: Option<PathBuf>,

        /// Card layout: post, story, square, og
        #[arg(long, default_value_t = CardType::Post)]
        card_type: CardType,
    },

    /// Rework an existing post
    Refactor {
        /// The post to rework
        #[arg(long)]
        post: String,

        /// What to change
        #[arg(long)]
        request: String,

        #[arg(long, default_value = "attract_volunteers")]
        goal: String,

        #[arg(long, default_value = "adults")]
        audience: String,

        #[arg(long, default_value = "telegram")]
        platform: String,
    },

    /// Proofread arbitrary text
    Edit {
        #[arg(long)]
        text: String,

        /// Extra instructions for the editor
        #[arg(long, default_value = "")]
        details: String,
    },

    /// Draft a content plan for a period
    Plan {
        /// Period the plan covers, e.g. "one month"
        #[arg(long)]
        period: String,

        /// Posting frequency, e.g. "3 posts a week"
        #[arg(long)]
        frequency: String,

        /// Themes to cover
        #[arg(long)]
        themes: String,

        /// Special requirements
        #[arg(long, default_value = "")]
        details: String,
    },

    /// Render a card from existing text
    Render {
        /// Body text of the card
        #[arg(long)]
        text: String,

        #[arg(long)]
        platform: String,

        #[arg(long)]
        goal: String,

        /// Organisation name (default: "Your NGO")
        #[arg(long)]
        org: Option<String>,

        /// Template id, overrides the platform default
        #[arg(long)]
        template: Option<String>,

        /// Card layout: post, story, square, og
        #[arg(long, default_value_t = CardType::Post)]
        card_type: CardType,

        /// Output PNG file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_events() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "generate",
            "--goal",
            "announce_event",
            "--audience",
            "families",
            "youth",
            "--platform",
            "telegram",
            "--format",
            "event_reminder",
            "--event",
            "date=June 1",
            "--event",
            "place = City park",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                audience, event, ..
            } => {
                assert_eq!(audience, vec!["families", "youth"]);
                assert_eq!(
                    event,
                    vec![
                        ("date".to_string(), "June 1".to_string()),
                        ("place".to_string(), "City park".to_string())
                    ]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_plan_and_card_type() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "plan",
            "--period",
            "one month",
            "--frequency",
            "weekly",
            "--themes",
            "ecology",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Plan { ref details, .. } if details.is_empty()
        ));

        let cli = Cli::try_parse_from([
            "postcraft", "render", "--text", "Hi", "--platform", "vk", "--goal", "announce_event",
            "--card-type", "story", "-o", "card.png",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render { card_type: CardType::Story, .. }
        ));

        assert!(
            Cli::try_parse_from(["postcraft", "wizard", "--card-type", "banner"]).is_err()
        );
    }

    #[test]
    fn rejects_malformed_event() {
        assert!(parse_key_value("no-equals").is_err());
        assert!(parse_key_value("=value").is_err());
    }
}
