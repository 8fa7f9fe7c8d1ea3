//! Interactive flows: the give-feedback editor, the request wizard, and the
//! login prompt. Everything stateful lives in [`DraftEditor`]; this module
//! only drives prompts and prints.

use crate::draft::{DraftEditor, FeedbackDraft, FeedbackField, MAX_FIELD_CHARS, ToneCheckOutcome};
use crate::error::FeedbackError;
use crate::feedback::{FeedbackRequest, RequestKind, SUBMITTED_MESSAGE};
use crate::fixtures::{self, Peer};
use crate::session::Role;
use crate::tone::ToneAdvisor;
use crate::ui::style as ui;
use crate::utils::text::{char_count, truncate_with_ellipsis};
use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use strum::IntoEnumIterator;
use tracing::info;

/// Form progress, same weights as the page header bar: each prose field
/// counts once it holds any text, the vibe rating closes the gap to 100.
fn completion_percent(draft: &FeedbackDraft) -> u8 {
    let mut percent = 0;
    if !draft.strengths.is_empty() {
        percent += 33;
    }
    if !draft.growth.is_empty() {
        percent += 33;
    }
    if draft.vibe_rating > 0 {
        percent += 34;
    }
    percent
}

fn counter(text: &str) -> String {
    format!("{}/{MAX_FIELD_CHARS}", char_count(text))
}

/// Input boundary for the 500-character limit. Oversize input is rejected
/// whole and the previous value kept, like the form's onChange guard; the
/// editor itself never truncates.
fn accept_within_limit(current: &str, input: String) -> (String, bool) {
    if char_count(&input) <= MAX_FIELD_CHARS {
        (input, true)
    } else {
        (current.to_string(), false)
    }
}

/// Tone tooling is offered where the form has the buttons: the two required
/// prose fields. Additional context only gets plain editing.
fn has_tone_tools(field: FeedbackField) -> bool {
    !matches!(field, FeedbackField::Additional)
}

/// Section-menu entry for a prose field, with a short preview of whatever
/// has been written so far.
fn field_item(number: u8, field: FeedbackField, editor: &DraftEditor) -> String {
    let mut item = format!("{number}. {}", field.label());
    if !field.is_required() {
        item.push_str(" (Optional)");
    }
    let text = editor.text(field);
    if !text.is_empty() {
        item.push_str(&format!(" — \"{}\"", truncate_with_ellipsis(text, 36)));
    }
    item
}

// ── Give-feedback flow ───────────────────────────────────────────

pub async fn run_give_flow(peer: &Peer, quarter: &str, advisor: &dyn ToneAdvisor) -> Result<()> {
    let mut editor = DraftEditor::new();

    println!();
    println!(
        "  {}  {}",
        ui::header(format!("Give Feedback to {}", peer.name)),
        ui::dim("[Anonymous]")
    );
    println!("  {}", ui::dim(format!("{} • {quarter} Review", peer.role)));

    loop {
        println!();
        println!(
            "  {} {}",
            ui::dim("Completion"),
            ui::value(format!("{}%", completion_percent(editor.draft())))
        );

        let vibe_item = match editor.vibe_rating() {
            0 => "3. Overall Vibe Rating".to_string(),
            rated => format!(
                "3. Overall Vibe Rating — {}",
                fixtures::vibe_label(rated).unwrap_or_default()
            ),
        };
        let items = [
            field_item(1, FeedbackField::Strengths, &editor),
            field_item(2, FeedbackField::Growth, &editor),
            vibe_item,
            field_item(4, FeedbackField::Additional, &editor),
            "Submit Feedback".to_string(),
            "Save Draft".to_string(),
        ];
        let choice = Select::new()
            .with_prompt("  Pick a section")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => edit_field(&mut editor, FeedbackField::Strengths, advisor).await?,
            1 => edit_field(&mut editor, FeedbackField::Growth, advisor).await?,
            2 => pick_vibe(&mut editor, peer)?,
            3 => edit_field(&mut editor, FeedbackField::Additional, advisor).await?,
            4 => match editor.draft().validate_for_submit() {
                Ok(()) => {
                    println!();
                    println!("  {}", ui::success(SUBMITTED_MESSAGE));
                    return Ok(());
                }
                Err(err) => println!("  {}", ui::error(err)),
            },
            _ => {
                println!(
                    "  {}",
                    ui::dim("Closed without submitting; drafts are not saved between runs.")
                );
                return Ok(());
            }
        }
    }
}

async fn edit_field(
    editor: &mut DraftEditor,
    field: FeedbackField,
    advisor: &dyn ToneAdvisor,
) -> Result<()> {
    loop {
        println!();
        println!("  {}", ui::header(field.label()));
        if let Some(description) = fixtures::field_description(field) {
            println!("  {}", ui::dim(description));
        }

        if editor.text(field).is_empty() {
            println!("  {}", ui::dim(fixtures::field_placeholder(field)));
        } else {
            println!("  {}", editor.text(field));
        }
        println!("  {}", ui::dim(counter(editor.text(field))));

        if let Some(guidance) = editor.guidance(field) {
            let banner = if guidance.is_error {
                ui::error(&guidance.message)
            } else {
                ui::cyan(&guidance.message)
            };
            println!("  {banner}");
            if editor.is_guidance_stale(field) {
                println!(
                    "  {}",
                    ui::yellow("Text changed since this check; run Check Tone again.")
                );
            }
        }

        let actions: &[&str] = if has_tone_tools(field) {
            &["Edit text", "AI Example", "Check Tone", "Clear", "Back"]
        } else {
            &["Edit text", "Clear", "Back"]
        };
        let choice = Select::new()
            .with_prompt("  Action")
            .items(actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Edit text" => {
                let input: String = Input::new()
                    .with_prompt("  Text")
                    .allow_empty(true)
                    .interact_text()?;
                let (value, accepted) = accept_within_limit(editor.text(field), input);
                if !accepted {
                    println!(
                        "  {}",
                        ui::yellow(format!(
                            "Limited to {MAX_FIELD_CHARS} characters; previous text kept"
                        ))
                    );
                }
                editor.set_text(field, value);
            }
            "AI Example" => {
                if let Some(example) = fixtures::ai_example(field) {
                    editor.set_text(field, example);
                }
            }
            "Check Tone" => match editor.check_tone(field, advisor).await {
                ToneCheckOutcome::Cleared => {
                    println!("  {}", ui::dim("Nothing to analyze; guidance cleared."));
                }
                ToneCheckOutcome::Applied | ToneCheckOutcome::Discarded => {}
            },
            "Clear" => editor.clear_field(field),
            _ => return Ok(()),
        }
    }
}

fn pick_vibe(editor: &mut DraftEditor, peer: &Peer) -> Result<()> {
    println!();
    println!("  {}", ui::header("Overall Vibe Rating"));
    println!(
        "  {}",
        ui::dim(format!(
            "How would you rate your overall experience working with {}?",
            peer.name
        ))
    );

    let labels: Vec<String> = (1u8..=5)
        .map(|rating| {
            format!(
                "{} {}",
                "★".repeat(usize::from(rating)),
                fixtures::vibe_label(rating).unwrap_or_default()
            )
        })
        .collect();
    let default = usize::from(editor.vibe_rating().saturating_sub(1));
    let choice = Select::new()
        .with_prompt("  Rating")
        .items(&labels)
        .default(default)
        .interact()?;

    editor.set_vibe(choice as u8 + 1);
    Ok(())
}

// ── Request wizard ───────────────────────────────────────────────

pub fn run_request_wizard(quarter: &str) -> Result<()> {
    println!();
    println!("  {}", ui::header("Request Peer Feedback"));
    println!(
        "  {}",
        ui::dim(format!(
            "Choose how you'd like to gather insights for {quarter}"
        ))
    );
    println!(
        "  {}",
        ui::dim("Different ways to initiate feedback based on your needs")
    );
    println!();

    let kinds: Vec<RequestKind> = RequestKind::iter().collect();
    let mut labels: Vec<String> = kinds
        .iter()
        .map(|kind| {
            if *kind == RequestKind::Suggest {
                format!("{} [Recommended] — {}", kind.label(), kind.description())
            } else {
                format!("{} — {}", kind.label(), kind.description())
            }
        })
        .collect();
    labels.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt("  Request type")
        .items(&labels)
        .default(0)
        .interact()?;
    if choice == kinds.len() {
        return Ok(());
    }
    let kind = kinds[choice];

    let peer_ids = if kind.requires_peer_selection() {
        select_peers()?
    } else {
        if kind == RequestKind::Suggest {
            println!();
            println!("  {}", ui::header("AI Recommended Peers"));
            for peer in fixtures::suggested_peers() {
                println!(
                    "  {} {} {} — {}",
                    ui::accent("›"),
                    peer.name,
                    ui::dim(format!("({})", peer.role)),
                    ui::dim(peer.reason)
                );
            }
        }
        Vec::new()
    };

    let context = prompt_context()?;

    let anonymous = Confirm::new()
        .with_prompt(format!("  {}", fixtures::ANONYMITY_LABEL))
        .default(false)
        .interact()?;
    if anonymous {
        println!("  {}", ui::dim(fixtures::ANONYMITY_NOTE));
    }

    let request = FeedbackRequest::new(kind, peer_ids, context, anonymous)?;
    info!(request_id = %request.id, kind = %request.kind, "feedback request sent");
    println!();
    println!("  {}", ui::success(request.confirmation_message()));
    Ok(())
}

fn select_peers() -> Result<Vec<String>> {
    let labels: Vec<String> = fixtures::PEERS
        .iter()
        .map(|peer| format!("{} — {}", peer.name, peer.role))
        .collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt("  Select Peers (1-5)")
            .items(&labels)
            .interact()?;
        if picked.is_empty() {
            println!("  {}", ui::error(FeedbackError::NoPeersSelected));
            continue;
        }
        return Ok(picked
            .into_iter()
            .map(|idx| fixtures::PEERS[idx].id.to_string())
            .collect());
    }
}

fn prompt_context() -> Result<String> {
    let items = [
        fixtures::CONTEXT_QUICK_FILLS[0].0,
        fixtures::CONTEXT_QUICK_FILLS[1].0,
        "Write my own",
        "Skip",
    ];
    let choice = Select::new()
        .with_prompt("  Additional Context (Optional)")
        .items(&items)
        .default(3)
        .interact()?;

    Ok(match choice {
        0 => fixtures::CONTEXT_QUICK_FILLS[0].1.to_string(),
        1 => fixtures::CONTEXT_QUICK_FILLS[1].1.to_string(),
        2 => Input::new()
            .with_prompt("  Context")
            .allow_empty(true)
            .interact_text()?,
        _ => String::new(),
    })
}

// ── Login prompt ─────────────────────────────────────────────────

pub fn prompt_login(admin_flag: bool) -> Result<(String, Role)> {
    println!();
    println!("  {}", ui::header(fixtures::APP_NAME));
    println!("  {}", ui::dim(fixtures::APP_TAGLINE));
    println!();

    let email: String = Input::new()
        .with_prompt("  Work email (you@acmeinc.com)")
        .interact_text()?;

    let role = if admin_flag {
        Role::Admin
    } else {
        let roles = [
            "Employee — Access your feedback and peer reviews",
            "Admin / HR — View team metrics and insights",
        ];
        let idx = Select::new()
            .with_prompt("  Role")
            .items(&roles)
            .default(0)
            .interact()?;
        if idx == 1 { Role::Admin } else { Role::Employee }
    };

    Ok((email, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_counts_each_section_once() {
        let mut draft = FeedbackDraft::default();
        assert_eq!(completion_percent(&draft), 0);

        draft.strengths = "clear communicator".into();
        assert_eq!(completion_percent(&draft), 33);

        draft.growth = "delegate more".into();
        assert_eq!(completion_percent(&draft), 66);

        draft.vibe_rating = 4;
        assert_eq!(completion_percent(&draft), 100);
    }

    #[test]
    fn completion_counts_untrimmed_text() {
        // Any text at all moves the bar, whitespace included.
        let draft = FeedbackDraft {
            strengths: " ".into(),
            ..FeedbackDraft::default()
        };
        assert_eq!(completion_percent(&draft), 33);
    }

    #[test]
    fn oversize_input_keeps_previous_text() {
        let over = "x".repeat(MAX_FIELD_CHARS + 1);
        let (value, accepted) = accept_within_limit("kept", over);
        assert!(!accepted);
        assert_eq!(value, "kept");
    }

    #[test]
    fn input_at_the_limit_is_accepted() {
        let exact = "y".repeat(MAX_FIELD_CHARS);
        let (value, accepted) = accept_within_limit("old", exact.clone());
        assert!(accepted);
        assert_eq!(value, exact);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let umlauts = "ü".repeat(MAX_FIELD_CHARS);
        assert!(umlauts.len() > MAX_FIELD_CHARS);
        let (_, accepted) = accept_within_limit("", umlauts);
        assert!(accepted);
    }

    #[test]
    fn counter_matches_form_format() {
        assert_eq!(counter(""), "0/500");
        assert_eq!(counter("hello"), "5/500");
    }

    #[test]
    fn tone_tools_only_on_required_prose_fields() {
        assert!(has_tone_tools(FeedbackField::Strengths));
        assert!(has_tone_tools(FeedbackField::Growth));
        assert!(!has_tone_tools(FeedbackField::Additional));
    }

    #[test]
    fn field_item_previews_entered_text() {
        let mut editor = DraftEditor::new();
        assert_eq!(
            field_item(1, FeedbackField::Strengths, &editor),
            "1. Strengths & Positive Impact (SBI Format)"
        );
        assert_eq!(
            field_item(4, FeedbackField::Additional, &editor),
            "4. Additional Context (Optional)"
        );

        editor.set_text(FeedbackField::Strengths, "kept the launch on track");
        let item = field_item(1, FeedbackField::Strengths, &editor);
        assert!(item.ends_with("— \"kept the launch on track\""));

        editor.set_text(FeedbackField::Strengths, "x".repeat(80));
        let item = field_item(1, FeedbackField::Strengths, &editor);
        assert!(item.contains("..."));
    }
}
