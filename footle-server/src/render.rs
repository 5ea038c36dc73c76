//! HTML fragments returned to the game page.

use std::fmt::Write;

use footle_types::{
    AttributeVerdict, ComparisonVerdict, Direction, GuessOutcome, RosterSnapshot, WinBanner,
};

pub const INVALID_GUESS_FRAGMENT: &str =
    r#"<div class="error" id="error">Error : Please pick a player in the list</div>"#;

pub const UNAVAILABLE_FRAGMENT: &str =
    r#"<div class="error" id="error">Today's player is unavailable, please try again later</div>"#;

const CARET_UP: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="#DCDCDC" class="bi bi-caret-up-fill" viewBox="0 0 16 16"><path d="m7.247 4.86-4.796 5.481c-.566.647-.106 1.659.753 1.659h9.592a1 1 0 0 0 .753-1.659l-4.796-5.48a1 1 0 0 0-1.506 0z"/></svg>"##;

const CARET_DOWN: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="#DCDCDC" class="bi bi-caret-down-fill" viewBox="0 0 16 16"><path d="M7.247 11.14 2.451 5.658C1.885 5.013 2.345 4 3.204 4h9.592a1 1 0 0 1 .753 1.659l-4.796 5.48a1 1 0 0 1-1.506 0z"/></svg>"##;

pub fn render_outcome(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Scored(verdict) => render_verdict(verdict),
        GuessOutcome::InvalidGuess => INVALID_GUESS_FRAGMENT.to_string(),
    }
}

/// One row of cells in fixed attribute order, then the banner on a win
pub fn render_verdict(verdict: &ComparisonVerdict) -> String {
    let mut html = String::from(r#"<div class="row">"#);

    let _ = write!(
        html,
        r#"<div><img src="{}" title="{}"/></div>"#,
        escape_html(&verdict.header.picture_url),
        escape_html(&verdict.header.display_name)
    );

    for attribute in &verdict.attributes {
        html.push_str(&render_attribute(attribute));
    }
    html.push_str("</div>");

    if let Some(banner) = &verdict.banner {
        html.push_str(&render_banner(banner));
    }

    html
}

fn render_attribute(attribute: &AttributeVerdict) -> String {
    let value = escape_html(&attribute.display_value);
    let content = if attribute.attribute.is_image() {
        format!(r#"<img src="{}"/>"#, value)
    } else {
        value
    };

    let glyph = match attribute.direction {
        Direction::GuessHigherThanSecret => CARET_UP,
        Direction::GuessLowerThanSecret => CARET_DOWN,
        Direction::NotApplicable => "",
    };

    format!(
        r#"<div class="{}">{}{}</div>"#,
        attribute.match_level.color(),
        content,
        glyph
    )
}

fn render_banner(banner: &WinBanner) -> String {
    format!(
        r#"<div class="winner" id="winner"><h2>Good Job ! You found <span>{}</span> in {} trys !</h2></div>"#,
        escape_html(&banner.secret_name),
        banner.attempt_count
    )
}

/// `<option>` entries for the whole roster in presentation order
pub fn render_roster_options(roster: &RosterSnapshot) -> String {
    roster.candidates.iter().fold(String::new(), |mut html, c| {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            escape_html(&c.identifier),
            escape_html(&c.display_name)
        );
        html
    })
}

pub fn render_found_count(found: u32) -> String {
    format!("<h2>Today {} people found !</h2>", found)
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
