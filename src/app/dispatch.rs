use crate::cli::commands::{Cli, Commands};
use crate::cli::{view, wizard};
use anyhow::{Context as _, Result, bail};
use postcraft::Config;
use postcraft::bootstrap::{self, RenderResources};
use postcraft::card::{CardSpec, CardType};
use postcraft::context::{Context, NgoProfile, PlanRequest};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

struct GenerateArgs {
    goal: String,
    audience: Vec<String>,
    platform: String,
    formats: Vec<String>,
    volume: String,
    event: Vec<(String, String)>,
    org: Option<String>,
}

fn build_context(args: GenerateArgs) -> Result<Context> {
    let mut builder = Context::builder()
        .goal(args.goal)
        .audience(args.audience)
        .platform(args.platform)
        .content_format(args.formats)
        .volume(args.volume)
        .has_event(!args.event.is_empty())
        .event_details(args.event);
    if let Some(org) = args.org.filter(|name| !name.trim().is_empty()) {
        builder = builder.ngo(NgoProfile::new(org));
    }
    Ok(builder.build()?)
}

/// Context for commands that only know goal and platform.
fn minimal_context(goal: &str, audience: &str, platform: &str) -> Result<Context> {
    Ok(Context::builder()
        .goal(goal)
        .audience([audience])
        .platform(platform)
        .content_format(["announcement"])
        .volume("medium")
        .build()?)
}

async fn render_to_file(config: &Config, spec: &CardSpec, out: &Path) -> Result<()> {
    let resources = RenderResources::launch(config).await?;
    let rendered = resources.renderer().render_card(spec).await;
    resources.shutdown().await;

    let png = rendered?;
    tokio::fs::write(out, &png)
        .await
        .with_context(|| format!("failed to write card to {}", out.display()))?;
    view::print_card_saved(out, png.len());
    Ok(())
}

async fn generate(
    config: &Config,
    context: &Context,
    user_text: &str,
    card: Option<&Path>,
    card_type: CardType,
) -> Result<()> {
    let generator = bootstrap::content_generator(config);
    let post = generator.generate_content(context, user_text).await?;
    view::print_post(&post);

    if let Some(out) = card {
        let spec = CardSpec::for_context_as(context, &post, None, card_type);
        render_to_file(config, &spec, out).await?;
    }
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Generate {
            goal,
            audience,
            platform,
            formats,
            volume,
            event,
            text,
            org,
            card,
            card_type,
        } => {
            let context = build_context(GenerateArgs {
                goal,
                audience,
                platform,
                formats,
                volume,
                event,
                org,
            })?;
            generate(&config, &context, &text, card.as_deref(), card_type).await
        }

        Commands::Wizard { card, card_type } => {
            let (context, notes) = wizard::run_questionnaire()?;
            generate(&config, &context, &notes, card.as_deref(), card_type).await
        }

        Commands::Refactor {
            post,
            request,
            goal,
            audience,
            platform,
        } => {
            if post.trim().is_empty() {
                bail!("--post must not be empty");
            }
            let context = minimal_context(&goal, &audience, &platform)?;
            let generator = bootstrap::content_generator(&config);
            let revised = generator.refactor_content(&context, &post, &request).await?;
            view::print_post(&revised);
            Ok(())
        }

        Commands::Edit { text, details } => {
            if text.trim().is_empty() {
                bail!("--text must not be empty");
            }
            let generator = bootstrap::content_generator(&config);
            let edited = generator.edit_text(&text, &details).await?;
            view::print_post(&edited);
            Ok(())
        }

        Commands::Plan {
            period,
            frequency,
            themes,
            details,
        } => {
            let plan = PlanRequest::new(period, frequency, themes)?.with_details(details);
            let generator = bootstrap::content_generator(&config);
            let text = generator.content_plan(&plan).await?;
            view::print_post(&text);
            Ok(())
        }

        Commands::Render {
            text,
            platform,
            goal,
            org,
            template,
            card_type,
            out,
        } => {
            let context = minimal_context(&goal, "adults", &platform)?;
            let mut spec = CardSpec::for_context_as(&context, &text, org.as_deref(), card_type);
            if let Some(template) = template {
                info!(template = %template, "overriding platform template");
                spec.template_id = template;
            }
            render_to_file(&config, &spec, &out).await
        }

        Commands::Config => {
            view::print_config(&config);
            Ok(())
        }
    }
}
