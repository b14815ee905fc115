//! Server-side rendering of the homepage.
//!
//! Every interpolated value goes through [`escape`].

use folio_core::flash::FlashMessage;
use folio_core::tags::split_tags;
use folio_db::models::project::Project;
use folio_db::models::testimonial::Testimonial;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_opt(text: Option<&str>) -> String {
    escape(text.unwrap_or_default())
}

/// Render the full homepage.
pub fn homepage(
    projects: &[Project],
    testimonials: &[Testimonial],
    messages: &[FlashMessage],
) -> String {
    let flashes: String = messages.iter().map(flash_html).collect();
    let project_cards: String = projects.iter().map(project_html).collect();
    let testimonial_cards: String = testimonials.iter().map(testimonial_html).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>InnovateTech</title>
</head>
<body>
<section id="projects">
<h2>Projects</h2>
{project_cards}</section>
<section id="testimonials">
<h2>Testimonials</h2>
{testimonial_cards}</section>
<section id="contact">
<h2>Contact</h2>
{flashes}<form method="post" action="/contact">
<input name="first" placeholder="First name">
<input name="last" placeholder="Last name">
<input name="email" type="email" placeholder="Email" required>
<input name="phone" placeholder="Phone">
<textarea name="message" placeholder="Message" required></textarea>
<button type="submit">Send</button>
</form>
</section>
</body>
</html>
"#
    )
}

fn flash_html(message: &FlashMessage) -> String {
    format!(
        "<div class=\"flash flash-{}\">{}</div>\n",
        message.level.as_str(),
        escape(&message.text)
    )
}

fn project_html(project: &Project) -> String {
    let tags: String = split_tags(project.tags.as_deref())
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape(tag)))
        .collect();

    format!(
        "<article class=\"project\">\
<img src=\"{img}\" alt=\"{title}\">\
<h3>{title}</h3>\
<p class=\"category\">{category}</p>\
<p>{description}</p>\
<div class=\"tags\">{tags}</div>\
</article>\n",
        img = escape_opt(project.img.as_deref()),
        title = escape_opt(project.title.as_deref()),
        category = escape_opt(project.category.as_deref()),
        description = escape_opt(project.description.as_deref()),
    )
}

fn testimonial_html(testimonial: &Testimonial) -> String {
    let rating = testimonial.rating.unwrap_or_default().clamp(0, 5);
    format!(
        "<blockquote class=\"testimonial\">\
<p>{text}</p>\
<footer>{author}, <span class=\"role\">{role}</span> \
<span class=\"rating\" aria-label=\"{rating} out of 5\">{stars}</span></footer>\
</blockquote>\n",
        text = escape_opt(testimonial.text.as_deref()),
        author = escape_opt(testimonial.author.as_deref()),
        role = escape_opt(testimonial.role.as_deref()),
        stars = "★".repeat(rating as usize),
    )
}
