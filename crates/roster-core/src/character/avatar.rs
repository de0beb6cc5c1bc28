//! Avatar resolution and the generated placeholder image.
//!
//! The placeholder is served by the API itself, so avatar resolution never
//! depends on an external image service and never fails.

use roster_types::character::RawImages;

/// Accent colors for generated avatars, picked by `id mod 5`.
pub const AVATAR_PALETTE: [&str; 5] = ["00B8D4", "FF2F92", "005CA1", "AF1010", "6B5CA5"];

/// Accent color used when a request names no valid color.
pub const DEFAULT_AVATAR_COLOR: &str = "00B8D4";

/// Route prefix of the placeholder avatar endpoint.
pub const AVATAR_ROUTE: &str = "/api/character-avatar";

/// Avatar plus the two additional image candidates for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImages {
    pub avatar: String,
    pub additional: Vec<String>,
}

/// Palette color for a character id. Negative ids wrap like positive ones.
pub fn palette_color(id: i64) -> &'static str {
    AVATAR_PALETTE[id.rem_euclid(AVATAR_PALETTE.len() as i64) as usize]
}

/// URL of the generated placeholder for a character.
pub fn placeholder_url(slug: &str, id: i64) -> String {
    format!(
        "{AVATAR_ROUTE}/{}?color={}",
        urlencoding::encode(slug),
        palette_color(id)
    )
}

/// Resolve the avatar and additional images.
///
/// Priority: main image, then head-shot, then the generated placeholder.
pub fn resolve_images(images: &RawImages, slug: &str, id: i64) -> ResolvedImages {
    let avatar = images
        .main()
        .or_else(|| images.head_shot())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_url(slug, id));

    let first = images
        .head_shot()
        .or_else(|| images.main())
        .unwrap_or(avatar.as_str())
        .to_string();
    let second = images.main().unwrap_or(avatar.as_str()).to_string();

    let additional = [first, second]
        .into_iter()
        .filter(|url| !url.is_empty())
        .collect();

    ResolvedImages { avatar, additional }
}

/// Accept a 6-digit hex color (with or without `#`), uppercased.
/// Anything else falls back to [`DEFAULT_AVATAR_COLOR`].
pub fn normalize_color(input: Option<&str>) -> String {
    input
        .map(|c| c.trim().trim_start_matches('#'))
        .filter(|c| c.len() == 6 && c.chars().all(|ch| ch.is_ascii_hexdigit()))
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| DEFAULT_AVATAR_COLOR.to_string())
}

/// Recover a display name from a slug: "philip-fry" -> "Philip Fry".
pub fn display_name_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn initial_of(name: &str) -> String {
    match name.chars().next() {
        Some(c) => escape_xml(&c.to_uppercase().collect::<String>()),
        None => "?".to_string(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the placeholder avatar for a slug as a 200x200 SVG document.
pub fn render_avatar_svg(slug: &str, color: Option<&str>) -> String {
    let color = normalize_color(color);
    let initial = initial_of(&display_name_from_slug(slug));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">
  <rect width="200" height="200" fill="#080A0E" />
  <rect x="5" y="5" width="190" height="190" fill="#0D1117" stroke="#{color}" stroke-width="2" />
  <path d="M5,5 L25,5 L25,7 L7,7 L7,25 L5,25 Z" fill="#{color}" />
  <path d="M195,5 L175,5 L175,7 L193,7 L193,25 L195,25 Z" fill="#{color}" />
  <path d="M5,195 L25,195 L25,193 L7,193 L7,175 L5,175 Z" fill="#{color}" />
  <path d="M195,195 L175,195 L175,193 L193,193 L193,175 L195,175 Z" fill="#{color}" />
  <path d="M0,50 L200,50" stroke="#{color}22" stroke-width="1" />
  <path d="M0,100 L200,100" stroke="#{color}22" stroke-width="1" />
  <path d="M0,150 L200,150" stroke="#{color}22" stroke-width="1" />
  <path d="M50,0 L50,200" stroke="#{color}22" stroke-width="1" />
  <path d="M100,0 L100,200" stroke="#{color}22" stroke-width="1" />
  <path d="M150,0 L150,200" stroke="#{color}22" stroke-width="1" />
  <text x="100" y="115" font-family="monospace" font-size="70" font-weight="bold" fill="#{color}" text-anchor="middle">{initial}</text>
  <circle cx="100" cy="160" r="15" fill="#{color}33" />
  <path d="M90,160 L110,160" stroke="#{color}" stroke-width="2" />
  <path d="M100,150 L100,170" stroke="#{color}" stroke-width="2" />
</svg>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(main: Option<&str>, head_shot: Option<&str>) -> RawImages {
        RawImages {
            main: main.map(str::to_string),
            head_shot: head_shot.map(str::to_string),
        }
    }

    #[test]
    fn test_palette_color_cycles() {
        assert_eq!(palette_color(0), "00B8D4");
        assert_eq!(palette_color(1), "FF2F92");
        assert_eq!(palette_color(4), "6B5CA5");
        assert_eq!(palette_color(5), "00B8D4");
        assert_eq!(palette_color(-1), "6B5CA5");
    }

    #[test]
    fn test_placeholder_url() {
        assert_eq!(
            placeholder_url("philip-fry", 1),
            "/api/character-avatar/philip-fry?color=FF2F92"
        );
    }

    #[test]
    fn test_placeholder_url_encodes_slug() {
        assert_eq!(
            placeholder_url("what?-who#", 0),
            "/api/character-avatar/what%3F-who%23?color=00B8D4"
        );
    }

    #[test]
    fn test_main_image_wins() {
        let resolved = resolve_images(
            &images(Some("https://img/main.png"), Some("https://img/head.png")),
            "philip-fry",
            1,
        );
        assert_eq!(resolved.avatar, "https://img/main.png");
        assert_eq!(
            resolved.additional,
            vec!["https://img/head.png", "https://img/main.png"]
        );
    }

    #[test]
    fn test_head_shot_used_without_main() {
        let resolved = resolve_images(&images(None, Some("https://img/head.png")), "amy-wong", 3);
        assert_eq!(resolved.avatar, "https://img/head.png");
        assert_eq!(
            resolved.additional,
            vec!["https://img/head.png", "https://img/head.png"]
        );
    }

    #[test]
    fn test_placeholder_without_image_data() {
        let resolved = resolve_images(&images(None, Some("")), "philip-fry", 1);
        assert_eq!(resolved.avatar, "/api/character-avatar/philip-fry?color=FF2F92");
        assert_eq!(resolved.additional.len(), 2);
        assert!(resolved.additional.iter().all(|url| url == &resolved.avatar));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let a = resolve_images(&RawImages::default(), "bender-rodriguez", 2);
        let b = resolve_images(&RawImages::default(), "bender-rodriguez", 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color(Some("ff2f92")), "FF2F92");
        assert_eq!(normalize_color(Some("#005ca1")), "005CA1");
        assert_eq!(normalize_color(Some("red")), DEFAULT_AVATAR_COLOR);
        assert_eq!(normalize_color(Some("abc")), DEFAULT_AVATAR_COLOR);
        assert_eq!(normalize_color(Some("\"/><script>")), DEFAULT_AVATAR_COLOR);
        assert_eq!(normalize_color(None), DEFAULT_AVATAR_COLOR);
    }

    #[test]
    fn test_display_name_from_slug() {
        assert_eq!(display_name_from_slug("philip-fry"), "Philip Fry");
        assert_eq!(display_name_from_slug("zoidberg"), "Zoidberg");
        assert_eq!(display_name_from_slug("--"), "");
    }

    #[test]
    fn test_svg_contains_initial_and_color() {
        let svg = render_avatar_svg("turanga-leela", Some("AF1010"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">T</text>"));
        assert!(svg.contains("stroke=\"#AF1010\""));
        assert!(svg.contains("#AF101022"));
    }

    #[test]
    fn test_svg_defaults_color() {
        let svg = render_avatar_svg("bender-rodriguez", None);
        assert!(svg.contains("fill=\"#00B8D4\""));
        assert!(svg.contains(">B</text>"));
    }

    #[test]
    fn test_svg_escapes_initial() {
        let svg = render_avatar_svg("<script>", None);
        assert!(svg.contains(">&lt;</text>"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_svg_with_empty_name() {
        let svg = render_avatar_svg("-", None);
        assert!(svg.contains(">?</text>"));
    }
}
