use super::view::{print_bullet, print_step};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use postcraft::context::{Context, NgoProfile};
use postcraft::questionnaire::{Answer, Questionnaire, QuestionnaireState};
use std::collections::BTreeMap;

const OTHER: &str = "other (type it)";
const TOTAL_STEPS: usize = 8;

fn ask_ngo() -> Result<Option<NgoProfile>> {
    let name: String = Input::new()
        .with_prompt("  Organisation name (leave empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if name.trim().is_empty() {
        return Ok(None);
    }

    let activities: String = Input::new()
        .with_prompt("  What does it do?")
        .allow_empty(true)
        .interact_text()?;
    let contact: String = Input::new()
        .with_prompt("  Contacts (phone, e-mail, site)")
        .allow_empty(true)
        .interact_text()?;

    Ok(Some(
        NgoProfile::new(name)
            .with_activities(activities)
            .with_contact(contact),
    ))
}

fn ask_choice(question: &str, options: &[&str]) -> Result<String> {
    let mut items: Vec<&str> = options.to_vec();
    items.push(OTHER);

    let idx = Select::new()
        .with_prompt(format!("  {question}"))
        .items(&items)
        .default(0)
        .interact()?;

    if items[idx] == OTHER {
        return Ok(Input::new()
            .with_prompt("  Your answer")
            .interact_text()?);
    }
    Ok(items[idx].to_string())
}

fn ask_choices(question: &str, options: &[&str]) -> Result<Vec<String>> {
    print_bullet(&style("space selects, enter confirms").dim().to_string());
    let picked = MultiSelect::new()
        .with_prompt(format!("  {question}"))
        .items(options)
        .interact()?;

    let mut values: Vec<String> = picked.iter().map(|&i| options[i].to_string()).collect();
    let extra: String = Input::new()
        .with_prompt("  Other (comma-separated, optional)")
        .allow_empty(true)
        .interact_text()?;
    values.extend(
        extra
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
    Ok(values)
}

fn ask_event_details(fields: &[&str]) -> Result<BTreeMap<String, String>> {
    let mut details = BTreeMap::new();
    for field in fields {
        let value: String = Input::new()
            .with_prompt(format!("  Event {field}"))
            .allow_empty(true)
            .interact_text()?;
        details.insert((*field).to_string(), value);
    }
    Ok(details)
}

fn ask(state: QuestionnaireState) -> Result<Answer> {
    let question = state.question();
    let options = state.options();

    Ok(match state {
        QuestionnaireState::Goal | QuestionnaireState::Platform | QuestionnaireState::Volume => {
            Answer::Choice(ask_choice(question, options)?)
        }
        QuestionnaireState::Audience | QuestionnaireState::Format => {
            Answer::Choices(ask_choices(question, options)?)
        }
        QuestionnaireState::HasEvent => Answer::YesNo(
            Confirm::new()
                .with_prompt(format!("  {question}"))
                .default(false)
                .interact()?,
        ),
        QuestionnaireState::EventDetails => {
            print_bullet(question);
            Answer::Pairs(ask_event_details(options)?)
        }
        QuestionnaireState::Notes | QuestionnaireState::Done => Answer::Text(
            Input::new()
                .with_prompt(format!("  {question}"))
                .allow_empty(true)
                .interact_text()?,
        ),
    })
}

/// Run the questionnaire until it yields a valid context.
pub fn run_questionnaire() -> Result<(Context, String)> {
    println!("  {}", style("Let's prepare a post").white().bold());

    let mut questionnaire = match ask_ngo()? {
        Some(ngo) => Questionnaire::new().with_ngo(ngo),
        None => Questionnaire::new(),
    };

    let mut step = 0;
    while !questionnaire.is_done() {
        let state = questionnaire.state();
        step = (step + 1).min(TOTAL_STEPS);
        print_step(step, TOTAL_STEPS, state.question());

        let answer = ask(state)?;
        if let Err(err) = questionnaire.answer(answer) {
            print_bullet(&style(err.to_string()).yellow().to_string());
            step -= 1;
        }
    }

    Ok(questionnaire.finish()?)
}
