//! Plain-text presentation of reports.

use std::fmt::Write;

use gather_core::{AggregateReport, PostWithComments, TimingReport, UserContent, UserProfile};

fn push_user(out: &mut String, user: &UserProfile) {
    let _ = writeln!(out, "User: {} ({})", user.name, user.username);
    let _ = writeln!(out, "Email: {}", user.email);
}

fn push_post(out: &mut String, p: &PostWithComments) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Post #{}: {}", p.id(), p.post.title);
    let _ = writeln!(out, "{}", p.post.body);
    if let Some(err) = p.comments_error() {
        let _ = writeln!(out, "  Comments error: {err}");
    } else {
        for c in p.comments() {
            let _ = writeln!(out, "  - {}: {}", c.username, c.text);
        }
    }
}

/// Render an aggregation report: profile, timing, errors, then posts.
#[must_use]
pub fn report_text(report: &AggregateReport) -> String {
    let mut out = String::new();
    if let Some(user) = &report.profile {
        push_user(&mut out, user);
    }
    let _ = writeln!(out, "Total time: {} ms", report.elapsed_ms);
    if report.has_errors() {
        let _ = writeln!(out, "Errors:");
        for e in &report.errors {
            let _ = writeln!(out, "  - {e}");
        }
    }
    for p in &report.posts {
        push_post(&mut out, p);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.message);
    out
}

/// Render the result of a fail-fast content fetch.
#[must_use]
pub fn content_text(content: &UserContent) -> String {
    let mut out = String::new();
    push_user(&mut out, &content.user);
    for p in &content.posts {
        push_post(&mut out, p);
    }
    out
}

/// Render a timing batch, one line per task in input order.
#[must_use]
pub fn timing_text(label: &str, report: &TimingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label}: {} ms", report.elapsed_ms);
    for t in &report.results {
        let _ = writeln!(
            out,
            "  {} ({} ms) finished at {}",
            t.name,
            t.delay_ms,
            t.time.to_rfc3339()
        );
    }
    out
}
