// SPDX-License-Identifier: MIT

//! The HTML report renderer.
//!
//! Pure string assembly over the finished grid, milestone buckets, effort
//! totals, and orphan list. Output is deterministic for a fixed input: a
//! single self-contained page with per-column show/hide toggles, the
//! milestone row, one row per WBS code, the effort summary table, and the
//! orphan list.

use rdm_core::{
    BlockerEntry, ClassifiedEpic, EffortTotals, Grid, MilestoneBuckets, PeriodClass, Taxonomy,
};

/// Story points per person-month.
const POINTS_PER_PERSON_MONTH: f64 = 26.3;
/// Months per person-year.
const MONTHS_PER_YEAR: f64 = 12.0;
/// Overhead divisor applied to person-years.
const OVERHEAD_FACTOR: f64 = 0.7;

/// Epic text colors by period class.
const COLOR_CLASS_A: &str = "c8682c"; // dark orange (winter/spring period)
const COLOR_CLASS_B: &str = "309124"; // green (extra/summer/fall period)
const COLOR_UNSPECIFIED: &str = "2c73c8"; // blue (no cycle qualifier)

/// Header/label cell background.
const COLOR_HEADER: &str = "#BEBEBE";
/// Milestone cell background.
const COLOR_MILESTONE: &str = "#7DDB90";

/// Everything the renderer needs, borrowed from the report pass.
#[derive(Debug)]
pub struct ReportInput<'a> {
    pub taxonomy: &'a Taxonomy,
    pub grid: &'a Grid,
    pub orphans: &'a [ClassifiedEpic],
    pub totals: &'a EffortTotals,
    pub milestones: &'a MilestoneBuckets,
    /// Base URL issue keys are linked under.
    pub browse_url: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Optional milestone dependency graph link, shown above the grid.
    pub graph_url: Option<&'a str>,
}

/// Render the full report document.
pub fn render_report(input: &ReportInput<'_>) -> String {
    let mut html = String::new();
    push_head(&mut html, input.taxonomy, input.title);
    html.push_str("<body>\n\n");
    if let Some(url) = input.graph_url {
        html.push_str(&format!(
            "<p><a href=\"{url}\">Dependency graph for milestones</a></p>\n\n"
        ));
    }
    push_toggle_bar(&mut html, input.taxonomy);
    push_grid_table(&mut html, input);
    push_totals_table(&mut html, input.totals);
    push_orphans(&mut html, input);
    push_legend(&mut html);
    html.push_str("</body>\n</html>\n");
    html
}

/// Escape text content for safe embedding in markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS class suffix for a fiscal-year column: "FY16" -> "16".
fn column_class(fiscal_year: &str) -> &str {
    fiscal_year.strip_prefix("FY").unwrap_or(fiscal_year)
}

/// Person-month figure for an effort value: integer when the fraction is
/// negligible, one decimal otherwise.
fn person_months(effort: u32) -> String {
    let pm = f64::from(effort) / POINTS_PER_PERSON_MONTH;
    if pm % 1.0 < 0.05 {
        format!("{}", pm as u32)
    } else {
        format!("{:.1}", pm)
    }
}

fn class_color(class: PeriodClass) -> &'static str {
    match class {
        PeriodClass::A => COLOR_CLASS_A,
        PeriodClass::B => COLOR_CLASS_B,
        PeriodClass::Unspecified => COLOR_UNSPECIFIED,
    }
}

/// One epic line: optional strike-through, a colored link, and the derived
/// person-month figure in brackets.
fn epic_line(epic: &ClassifiedEpic, browse_url: &str) -> String {
    let (strike_open, strike_close) = if epic.is_done() {
        ("<strike>", "</strike>")
    } else {
        ("", "")
    };
    format!(
        "{}<a href=\"{}/{}\"><font color=\"{}\">{} ({})</font></a>{}",
        strike_open,
        browse_url,
        epic.key,
        class_color(epic.class),
        escape(&epic.summary),
        person_months(epic.effort),
        strike_close,
    )
}

/// One blocker line: same shape as an epic line, blue, no effort figure.
fn blocker_line(blocker: &BlockerEntry, browse_url: &str) -> String {
    let done = blocker.status.as_deref() == Some("Done");
    let (strike_open, strike_close) = if done { ("<strike>", "</strike>") } else { ("", "") };
    format!(
        "{}<a href=\"{}/{}\"><font color=\"{}\">{}</font></a>{}",
        strike_open,
        browse_url,
        blocker.key,
        COLOR_UNSPECIFIED,
        escape(&blocker.summary),
        strike_close,
    )
}

fn push_head(html: &mut String, taxonomy: &Taxonomy, title: &str) {
    html.push_str(&format!("<html>\n<head>\n<title>{}</title>\n\n<style>\n", escape(title)));
    for fy in &taxonomy.fiscal_years {
        html.push_str(&format!(
            "    .col{} {{display: table-cell; }}\n",
            column_class(fy)
        ));
    }
    html.push('\n');
    for fy in &taxonomy.fiscal_years {
        let col = column_class(fy);
        html.push_str(&format!(
            "    table.show{col} .col{col} {{ display: none; }}\n"
        ));
    }
    html.push_str("</style>\n\n<script>\n");
    html.push_str(
        "function toggleColumn(n) {\n\
         \x20   var currentClass = document.getElementById(\"mytable\").className;\n\
         \x20   if (currentClass.indexOf(\"show\"+n) != -1) {\n\
         \x20       document.getElementById(\"mytable\").className = currentClass.replace(\"show\"+n, \"\");\n\
         \x20   } else {\n\
         \x20       document.getElementById(\"mytable\").className += \" \" + \"show\"+n;\n\
         \x20   }\n\
         }\n",
    );
    html.push_str("</script>\n\n</head>\n");
}

/// The clickable per-column show/hide toggle row.
fn push_toggle_bar(html: &mut String, taxonomy: &Taxonomy) {
    html.push_str("<p>Press to turn off/on a given column:\n<table border=\"1\">\n  <tr>\n");
    for fy in &taxonomy.fiscal_years {
        html.push_str(&format!(
            "    <td onclick=\"toggleColumn({})\">{}</td>\n",
            column_class(fy),
            escape(fy)
        ));
    }
    html.push_str("  </tr>\n</table></p>\n\n");
}

fn push_grid_table(html: &mut String, input: &ReportInput<'_>) {
    html.push_str("<table id=\"mytable\" border='1'>\n");

    // header row of fiscal-year labels
    html.push_str(&format!("  <tr>\n    <td bgcolor=\"{COLOR_HEADER}\"></td>\n"));
    for fy in &input.taxonomy.fiscal_years {
        html.push_str(&format!(
            "    <td class=\"col{}\" bgcolor=\"{}\" align='middle' width='15%'>{}</td>\n",
            column_class(fy),
            COLOR_HEADER,
            escape(fy)
        ));
    }
    html.push_str("  </tr>\n");

    push_milestone_row(html, input);

    for row in input.grid.rows() {
        html.push_str(&format!(
            "  <tr>\n    <td valign=\"top\" bgcolor=\"{}\">{}<br>{}</td>\n",
            COLOR_HEADER,
            escape(&row.wbs.code),
            escape(&row.wbs.title)
        ));
        for cell in &row.cells {
            let col = column_class(&cell.fiscal_year);
            if cell.is_empty() {
                html.push_str(&format!(
                    "    <td class=\"col{col}\" valign=\"top\">&nbsp;</td>\n"
                ));
                continue;
            }
            html.push_str(&format!(
                "    <td class=\"col{col}\" valign=\"top\">\n      <ul style=\"list-item-style:none; margin-left:0px;padding-left:20px;\">\n"
            ));
            for epic in cell.ordered() {
                html.push_str(&format!(
                    "        <li>{}</li>\n",
                    epic_line(epic, input.browse_url)
                ));
                if !epic.blocked_by.is_empty() {
                    html.push_str("          <ul>\n");
                    for blocker in &epic.blocked_by {
                        html.push_str(&format!(
                            "            <li><small><i>{}</i></small></li>\n",
                            blocker_line(blocker, input.browse_url)
                        ));
                    }
                    html.push_str("          </ul>\n");
                }
            }
            html.push_str("      </ul></td>\n");
        }
        html.push_str("  </tr>\n");
    }

    html.push_str("</table>\n\n");
}

/// The milestone row, one green cell per fiscal year.
fn push_milestone_row(html: &mut String, input: &ReportInput<'_>) {
    html.push_str(&format!(
        "  <tr>\n    <td width=\"10%\" bgcolor=\"{COLOR_HEADER}\" valign=\"top\">Milestones</td>\n"
    ));
    for (fy, entries) in input.milestones.iter() {
        html.push_str(&format!(
            "    <td class=\"col{}\" valign=\"top\" bgcolor=\"{}\">\n      <ul style=\"list-item-style:none; margin-left:0px;padding-left:20px;\">\n",
            column_class(fy),
            COLOR_MILESTONE
        ));
        for entry in entries {
            html.push_str(&format!(
                "        <li><a href=\"{}/{}\">{}</a></li>\n",
                input.browse_url,
                entry.key,
                escape(&entry.summary)
            ));
        }
        html.push_str("      </ul></td>\n");
    }
    html.push_str("  </tr>\n");
}

/// The per-fiscal-year effort summary: points, person-months, person-years,
/// and person-years under the fixed overhead factor.
fn push_totals_table(html: &mut String, totals: &EffortTotals) {
    html.push_str(
        "<p>Breakdown of story points per FY:\n<table border='1'>\n    <tr>\n      \
         <td align='middle'>FY\n      \
         <td align='middle'>story points\n      \
         <td align='middle'>SP-based person-months\n      \
         <td align='middle'>SP-based person-years\n      \
         <td align='middle'>person-years w/overhead\n",
    );
    for (fy, points) in totals.iter() {
        let months = f64::from(points) / POINTS_PER_PERSON_MONTH;
        let years = months / MONTHS_PER_YEAR;
        let years_overhead = years / OVERHEAD_FACTOR;
        html.push_str(&format!(
            "    <tr><td align='middle'>{}<td align='middle'>{}<td align='middle'>{}<td align='middle'>{:.1}<td align='middle'>{:.1}\n",
            escape(fy),
            points,
            months as u32,
            years,
            years_overhead
        ));
    }
    html.push_str("</table>\n\n");
}

/// The orphans: issues that matched neither classification rule.
fn push_orphans(html: &mut String, input: &ReportInput<'_>) {
    html.push_str("<p>The following did not make it to the above table:\n  <ul>\n");
    for orphan in input.orphans {
        html.push_str(&format!(
            "    <li><a href=\"{}/{}\">{}</a></li>\n",
            input.browse_url,
            orphan.key,
            escape(&orphan.summary)
        ));
    }
    html.push_str("</ul></p>\n");
}

fn push_legend(html: &mut String) {
    html.push_str(
        "<p>Explanation: orange color - winter/spring period, green color - \
         summer/fall period, blue color - period not specified.</p>\n\
         The numbers next to epics in brackets: effort expressed in \
         person-months, where 1 person-month = 26.3 story points\n\n",
    );
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
