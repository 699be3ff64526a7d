//! Page composition.
//!
//! The whole portfolio is laid out as one tall list of lines. Composition
//! records where each section starts (its anchor) and which lines are
//! tech-stack panel headers, so navigation and mouse clicks can map lines
//! back to what is shown there.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::contact::{ContactForm, Field, SubmitStatus};
use crate::content::{Portfolio, TechCategory};

use super::style;

const INDENT: &str = "  ";

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    TechStack,
    Services,
    Portfolio,
    Blog,
    News,
    Contact,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::TechStack,
        Self::Services,
        Self::Portfolio,
        Self::Blog,
        Self::News,
        Self::Contact,
    ];

    /// Sections linked from the navbar, in order. Number keys 1-7 follow
    /// this list.
    pub const NAV: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Portfolio,
        Self::Blog,
        Self::News,
        Self::Contact,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::TechStack => "Tech",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Blog => "Blog",
            Self::News => "News",
            Self::Contact => "Contact",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::TechStack => "Tech Stacks",
            Self::Services => "My Services",
            Self::Portfolio => "Featured Projects",
            Self::Blog => "Latest Blog Posts",
            Self::News => "News & Highlights",
            Self::Contact => "Get In Touch",
        }
    }
}

/// First line of every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors([usize; 8]);

impl Anchors {
    pub const fn get(&self, section: Section) -> usize {
        self.0[section.index()]
    }

    /// The section containing `line`.
    pub fn section_at(&self, line: usize) -> Section {
        Section::ALL
            .iter()
            .rev()
            .copied()
            .find(|s| self.get(*s) <= line)
            .unwrap_or(Section::Home)
    }
}

/// Everything composition needs to know about the current state.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub typed: &'a str,
    pub cursor_visible: bool,
    pub expanded: [bool; 4],
    pub panel_focus: Option<TechCategory>,
    pub form: &'a ContactForm,
    pub form_active: bool,
    pub submitting: bool,
    pub submit_status: Option<SubmitStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub anchors: Anchors,
    pub panel_headers: Vec<(usize, TechCategory)>,
    pub hero_line: usize,
}

impl Page {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Tech category whose panel header sits on `line`.
    pub fn panel_at(&self, line: usize) -> Option<TechCategory> {
        self.panel_headers
            .iter()
            .find(|(l, _)| *l == line)
            .map(|(_, c)| *c)
    }

    pub fn panel_header_line(&self, category: TechCategory) -> Option<usize> {
        self.panel_headers
            .iter()
            .find(|(_, c)| *c == category)
            .map(|(l, _)| *l)
    }
}

/// Lay out the page for a content column `width` cells wide.
pub fn compose(view: &PageView<'_>, width: u16) -> Page {
    let mut b = Builder::new(width);
    let p = view.portfolio;

    // Home
    b.anchor(Section::Home);
    b.blank();
    b.styled(&p.profile.greeting, style::accent());
    b.page.hero_line = b.page.lines.len();
    b.push(hero_line(view));
    b.blank();
    b.wrapped(&p.profile.tagline, style::muted());
    b.blank();
    b.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(" Inquire Now [7] ", style::nav_active()),
        Span::raw("  "),
        Span::styled(" Portfolio [4] ", style::nav_active()),
    ]));
    b.blank();

    // About
    b.heading(Section::About);
    b.styled("My Journey", style::title());
    b.wrapped(&p.about.journey, style::body());
    b.blank();
    b.styled("Skills & Expertise", style::title());
    let label_width = p
        .about
        .skills
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);
    for skill in &p.about.skills {
        let pad = label_width.saturating_sub(skill.name.width());
        b.push(Line::from(vec![
            Span::styled(
                format!("{INDENT}{}{} ", skill.name, " ".repeat(pad)),
                style::muted(),
            ),
            Span::styled(skill_bar(skill.percent), style::accent()),
            Span::styled(format!(" {}%", skill.percent.min(100)), style::muted()),
        ]));
    }
    b.blank();
    if !p.about.resume_url.is_empty() {
        b.push(Line::from(vec![
            Span::styled(format!("{INDENT}Download CV: "), style::muted()),
            Span::styled(p.about.resume_url.clone(), style::link()),
        ]));
        b.blank();
    }
    b.styled("All Certifications", style::title());
    for cert in &p.certifications {
        b.styled(&format!("• {}", cert.title), style::body());
        b.push(Line::from(vec![
            Span::styled(format!("{INDENT}  Issued by {} · ", cert.issuer), style::muted()),
            Span::styled(cert.date.clone(), style::accent()),
        ]));
    }
    b.blank();

    // Tech stack
    b.heading(Section::TechStack);
    for category in TechCategory::ALL {
        let items: Vec<&str> = p.tech_in(category).map(|t| t.name.as_str()).collect();
        let expanded = view.expanded[category.index()];
        let marker = if expanded { "▾" } else { "▸" };
        let header = format!("{INDENT}{marker} {category} ({})", items.len());
        let header_style = if view.panel_focus == Some(category) {
            style::focused(style::title())
        } else {
            style::title()
        };
        b.page.panel_headers.push((b.page.lines.len(), category));
        b.push(Line::styled(header, header_style));
        if expanded {
            b.wrapped_indented(&items.join(" · "), style::accent(), "      ");
        }
    }
    b.blank();

    // Services
    b.heading(Section::Services);
    for service in &p.services {
        b.styled(&service.title, style::title());
        b.wrapped(&service.description, style::muted());
        b.blank();
    }

    // Portfolio
    b.heading(Section::Portfolio);
    b.wrapped(
        "Here are some of my recent projects that showcase my skills and expertise in web \
         development and design.",
        style::muted(),
    );
    b.blank();
    for project in &p.projects {
        b.styled(&project.title, style::title());
        b.wrapped(&project.description, style::body());
        let mut tags = vec![Span::raw(INDENT)];
        for tag in &project.tags {
            tags.push(Span::styled(format!(" {tag} "), style::tag()));
            tags.push(Span::raw(" "));
        }
        b.push(Line::from(tags));
        b.push(Line::from(vec![
            Span::styled(format!("{INDENT}Code: "), style::muted()),
            Span::styled(project.github_url.clone(), style::link()),
        ]));
        b.blank();
    }

    // Blog
    b.heading(Section::Blog);
    b.wrapped(
        "Explore my latest thoughts, tutorials, and insights on web development, \
         programming, and tech industry trends.",
        style::muted(),
    );
    b.blank();
    for post in &p.blog.posts {
        b.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!(" {} ", post.category), style::tag()),
            Span::styled(format!("  {} · {}", post.date, post.read_time), style::muted()),
        ]));
        b.wrapped(&post.title, style::title());
        b.wrapped(&post.excerpt, style::body());
        b.push(Line::from(vec![
            Span::styled(format!("{INDENT}Read More: "), style::muted()),
            Span::styled(post.url.clone(), style::link()),
        ]));
        b.blank();
    }
    b.push(Line::from(vec![
        Span::styled(format!("{INDENT}View All Posts: "), style::muted()),
        Span::styled(p.blog.all_posts_url.clone(), style::link()),
    ]));
    b.blank();

    // News
    b.heading(Section::News);
    b.wrapped(
        "Stay updated with the recent news and updates about my projects and professional \
         journey.",
        style::muted(),
    );
    b.blank();
    for item in &p.announcements {
        b.wrapped(&item.title, style::title());
        b.wrapped(&item.body, style::body());
        b.blank();
    }

    // Contact
    b.heading(Section::Contact);
    for (label, value) in [
        ("Email", &p.contact.email),
        ("Phone", &p.contact.phone),
        ("Location", &p.contact.location),
    ] {
        b.push(Line::from(vec![
            Span::styled(format!("{INDENT}{label:<10}"), style::muted()),
            Span::styled(value.clone(), style::body()),
        ]));
    }
    b.blank();
    compose_form(&mut b, view);
    b.blank();

    // Footer
    b.styled(&p.profile.name, style::accent_bold());
    let socials: Vec<Span<'static>> = p
        .socials
        .iter()
        .flat_map(|s| {
            [
                Span::styled(format!("{}: ", s.label), style::muted()),
                Span::styled(s.url.clone(), style::link()),
                Span::raw("  "),
            ]
        })
        .collect();
    let mut footer = vec![Span::raw(INDENT)];
    footer.extend(socials);
    b.push(Line::from(footer));
    b.styled(
        &format!("© 2025 {}. All rights reserved.", p.profile.name),
        style::muted(),
    );

    b.page
}

/// The headline with the typewriter text and cursor. It is always one line,
/// so it can be swapped into a composed page on every tick.
pub fn hero_line(view: &PageView<'_>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{INDENT}{}", view.portfolio.profile.headline_prefix),
            style::title(),
        ),
        Span::styled(view.typed.to_string(), style::accent_bold()),
        Span::styled(if view.cursor_visible { "|" } else { " " }, style::accent()),
    ])
}

fn compose_form(b: &mut Builder, view: &PageView<'_>) {
    let form = view.form;
    let hint = if view.form_active {
        "Tab: next field · Ctrl-S: send · Esc: leave form"
    } else {
        "Press c to fill in the form"
    };
    b.styled(hint, style::muted());
    for field in Field::ALL {
        let focused = view.form_active && form.focus == field;
        b.styled(field.label(), style::title());
        let value = form.value(field);
        let value_style = if focused {
            style::focused(style::body())
        } else {
            style::body()
        };
        let mut rows: Vec<&str> = value.split('\n').collect();
        if value.is_empty() && !focused {
            b.styled("…", style::muted());
            continue;
        }
        let last = rows.pop().unwrap_or_default();
        for row in rows {
            b.push(Line::styled(format!("{INDENT}  {row}"), value_style));
        }
        let cursor = if focused { "_" } else { "" };
        b.push(Line::styled(format!("{INDENT}  {last}{cursor}"), value_style));
    }
    b.blank();
    let button = if view.submitting {
        " Sending… "
    } else {
        " Send Message "
    };
    b.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(button, style::nav_active()),
    ]));
    match view.submit_status {
        Some(SubmitStatus::Success) => b.styled("Message sent successfully!", style::success()),
        Some(SubmitStatus::Error) => b.styled(
            "Failed to send message. Please try again.",
            style::error(),
        ),
        None => {}
    }
}

/// Ten-cell bar for a 0-100 percentage.
pub fn skill_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)).div_ceil(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Builder {
    page: Page,
    width: usize,
}

impl Builder {
    fn new(width: u16) -> Self {
        Self {
            page: Page::default(),
            width: usize::from(width),
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.page.lines.push(line);
    }

    fn blank(&mut self) {
        self.push(Line::raw(""));
    }

    fn anchor(&mut self, section: Section) {
        self.page.anchors.0[section.index()] = self.page.lines.len();
    }

    fn heading(&mut self, section: Section) {
        self.anchor(section);
        self.push(Line::styled(
            format!("{INDENT}{}", section.title()),
            style::section_heading(),
        ));
        self.blank();
    }

    fn styled(&mut self, text: &str, style: ratatui::style::Style) {
        self.push(Line::styled(format!("{INDENT}{text}"), style));
    }

    fn wrapped(&mut self, text: &str, style: ratatui::style::Style) {
        self.wrapped_indented(text, style, INDENT);
    }

    fn wrapped_indented(&mut self, text: &str, style: ratatui::style::Style, indent: &str) {
        let available = self.width.saturating_sub(indent.width() + 2).max(10);
        for paragraph in text.split('\n') {
            for row in wrap(paragraph, available) {
                self.push(Line::styled(format!("{indent}{row}"), style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn view<'a>(portfolio: &'a Portfolio, form: &'a ContactForm) -> PageView<'a> {
        PageView {
            portfolio,
            typed: " Dev",
            cursor_visible: true,
            expanded: [false; 4],
            panel_focus: None,
            form,
            form_active: false,
            submitting: false,
            submit_status: None,
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(rows, ["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(rows.iter().all(|r| r.width() <= 10));
    }

    #[test]
    fn test_wrap_empty_text_yields_one_blank_row() {
        assert_eq!(wrap("", 20), [""]);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        assert_eq!(wrap("a supercalifragilistic b", 5), ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_skill_bar_rounds_up_partial_cells() {
        assert_eq!(skill_bar(70), "███████░░░");
        assert_eq!(skill_bar(0), "░░░░░░░░░░");
        assert_eq!(skill_bar(35), "████░░░░░░");
        assert_eq!(skill_bar(255), "██████████");
    }

    #[test]
    fn test_anchors_are_ordered_and_point_at_titles() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let page = compose(&view(&portfolio, &form), 80);
        let mut previous = 0;
        for section in Section::ALL.into_iter().skip(1) {
            let anchor = page.anchors.get(section);
            assert!(anchor > previous, "{section:?} anchor out of order");
            assert!(line_text(&page.lines[anchor]).contains(section.title()));
            previous = anchor;
        }
    }

    #[test]
    fn test_about_links_the_cv_when_present() {
        let mut portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let page = compose(&view(&portfolio, &form), 80);
        let about = page.anchors.get(Section::About)..page.anchors.get(Section::TechStack);
        let cv = page.lines[about]
            .iter()
            .map(line_text)
            .find(|text| text.contains("Download CV"))
            .unwrap();
        assert!(cv.ends_with("/assets/resume/AlyssaJecomo_CV.pdf"), "{cv}");

        portfolio.about.resume_url.clear();
        let page = compose(&view(&portfolio, &form), 80);
        assert!(
            page.lines
                .iter()
                .all(|line| !line_text(line).contains("Download CV"))
        );
    }

    #[test]
    fn test_hero_line_shows_typed_text_and_cursor() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let mut v = view(&portfolio, &form);
        let page = compose(&v, 80);
        assert_eq!(line_text(&page.lines[page.hero_line]), "  I am Web Dev|");

        v.cursor_visible = false;
        v.typed = "";
        let page = compose(&v, 80);
        assert_eq!(line_text(&page.lines[page.hero_line]), "  I am Web ");
    }

    #[test]
    fn test_typed_text_does_not_change_layout() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let mut v = view(&portfolio, &form);
        let short = compose(&v, 60);
        v.typed = " Developer";
        let long = compose(&v, 60);
        assert_eq!(short.len(), long.len());
        assert_eq!(short.anchors, long.anchors);
    }

    #[test]
    fn test_expanding_one_panel_adds_its_items_only() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let mut v = view(&portfolio, &form);
        let collapsed = compose(&v, 80);
        v.expanded[TechCategory::DesignTools.index()] = true;
        let expanded = compose(&v, 80);

        assert_eq!(expanded.len(), collapsed.len() + 1);
        let header = expanded
            .panel_header_line(TechCategory::DesignTools)
            .unwrap();
        assert!(line_text(&expanded.lines[header]).contains("▾ Design Tools (2)"));
        assert!(line_text(&expanded.lines[header + 1]).contains("Lunacy · Figma"));
        let frontend = expanded.panel_header_line(TechCategory::Frontend).unwrap();
        assert!(line_text(&expanded.lines[frontend]).contains("▸ Frontend (6)"));
    }

    #[test]
    fn test_panel_at_maps_header_lines() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let page = compose(&view(&portfolio, &form), 80);
        for category in TechCategory::ALL {
            let line = page.panel_header_line(category).unwrap();
            assert_eq!(page.panel_at(line), Some(category));
        }
        assert_eq!(page.panel_at(0), None);
    }

    #[test]
    fn test_section_at_picks_last_anchor_before_line() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let page = compose(&view(&portfolio, &form), 80);
        let services = page.anchors.get(Section::Services);
        assert_eq!(page.anchors.section_at(services), Section::Services);
        assert_eq!(page.anchors.section_at(services + 1), Section::Services);
        assert_eq!(page.anchors.section_at(services - 1), Section::TechStack);
        assert_eq!(page.anchors.section_at(0), Section::Home);
    }

    #[test]
    fn test_active_form_marks_focused_field() {
        let portfolio = Portfolio::builtin();
        let mut form = ContactForm::default();
        form.name = "Ada".to_string();
        form.focus = Field::Name;
        let mut v = view(&portfolio, &form);
        v.form_active = true;
        let page = compose(&v, 80);
        let texts: Vec<String> = page.lines.iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t == "    Ada_"));
    }

    #[test]
    fn test_submit_status_is_shown() {
        let portfolio = Portfolio::builtin();
        let form = ContactForm::default();
        let mut v = view(&portfolio, &form);
        v.submit_status = Some(SubmitStatus::Error);
        let page = compose(&v, 80);
        assert!(
            page.lines
                .iter()
                .any(|l| line_text(l).contains("Failed to send message"))
        );
    }

    #[test]
    fn test_message_newlines_become_rows() {
        let portfolio = Portfolio::builtin();
        let mut form = ContactForm::default();
        let before = compose(&view(&portfolio, &form), 80).len();
        form.message = "one\ntwo\nthree".to_string();
        let after = compose(&view(&portfolio, &form), 80).len();
        assert_eq!(after, before + 2);
    }
}
