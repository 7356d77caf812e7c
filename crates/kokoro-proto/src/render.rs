//! Front-end contracts and the recommendation panel projection.
//!
//! The orchestrator never touches a concrete UI. It talks to whatever
//! implements [`MessageRenderer`], [`RecommendationRenderer`] and
//! [`Navigator`]; the terminal front end forwards these calls into its event
//! loop, tests record them.

use crate::protocol::Track;

/// Maximum number of cards the recommendation panel shows.
pub const MAX_CARDS: usize = 8;

/// Number of accent colours cards cycle through.
pub const PALETTE_SIZE: usize = 4;

/// Who a chat line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    System,
    Error,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Kokoro",
            Self::System => "System",
            Self::Error => "Error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::User => "›",
            Self::Bot => "♥",
            Self::System => "·",
            Self::Error => "✗",
        }
    }
}

pub trait MessageRenderer {
    /// Append one line to the chat log.
    fn append(&self, sender: Sender, text: &str);
}

pub trait RecommendationRenderer {
    /// Replace the recommendation panel. `None` or an empty slice shows the
    /// placeholder.
    fn render(&self, tracks: Option<&[Track]>);
}

pub trait Navigator {
    /// Leave the normal UI for `target`. Nothing else is rendered for the
    /// submission that triggered it.
    fn navigate(&self, target: &str);
}

/// Everything the orchestrator needs from a front end.
pub trait Frontend: MessageRenderer + RecommendationRenderer + Navigator {}

impl<T: MessageRenderer + RecommendationRenderer + Navigator + ?Sized> Frontend for T {}

// ── Recommendation panel ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    Image(String),
    /// No artwork; show this glyph instead.
    Glyph(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Audio(String),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCard {
    pub name: String,
    pub artist: String,
    /// Clamped to 0–100.
    pub popularity: u32,
    pub cover: Cover,
    pub link: Option<String>,
    pub preview: Preview,
    /// Index into the accent palette.
    pub accent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecommendationPanel {
    #[default]
    Placeholder,
    Tracks {
        cards: Vec<TrackCard>,
        total: usize,
    },
}

impl RecommendationPanel {
    /// Project a track list into the panel's visual structure. Only the first
    /// [`MAX_CARDS`] tracks become cards; the rest only count towards `total`.
    pub fn project(tracks: Option<&[Track]>) -> Self {
        let tracks = match tracks {
            Some(t) if !t.is_empty() => t,
            _ => return Self::Placeholder,
        };

        let cards = tracks
            .iter()
            .take(MAX_CARDS)
            .enumerate()
            .map(|(i, t)| TrackCard {
                name: t.name.clone(),
                artist: t.artist.clone(),
                popularity: t.popularity.min(100),
                cover: match non_empty(&t.image_url) {
                    Some(url) => Cover::Image(url.to_string()),
                    None => Cover::Glyph('♪'),
                },
                link: non_empty(&t.external_url).map(str::to_string),
                preview: match non_empty(&t.preview_url) {
                    Some(url) => Preview::Audio(url.to_string()),
                    None => Preview::Unavailable,
                },
                accent: i % PALETTE_SIZE,
            })
            .collect();

        Self::Tracks {
            cards,
            total: tracks.len(),
        }
    }

    pub fn cards(&self) -> &[TrackCard] {
        match self {
            Self::Placeholder => &[],
            Self::Tracks { cards, .. } => cards,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// "Showing k of N recommendations", or `None` for the placeholder.
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Placeholder => None,
            Self::Tracks { cards, total } => Some(format!(
                "Showing {} of {} recommendations",
                cards.len(),
                total
            )),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(i: usize) -> Track {
        Track {
            name: format!("Song {}", i),
            artist: format!("Artist {}", i),
            popularity: 50 + i as u32,
            image_url: None,
            external_url: None,
            preview_url: None,
        }
    }

    #[test]
    fn test_none_and_empty_are_placeholder() {
        let none = RecommendationPanel::project(None);
        let empty = RecommendationPanel::project(Some(&[][..]));
        assert_eq!(none, empty);
        assert!(none.is_placeholder());
        assert!(none.summary().is_none());
        assert!(none.cards().is_empty());
    }

    #[test]
    fn test_more_than_eight_is_capped() {
        let tracks: Vec<Track> = (0..12).map(track).collect();
        let panel = RecommendationPanel::project(Some(tracks.as_slice()));
        assert_eq!(panel.cards().len(), 8);
        assert_eq!(
            panel.summary().as_deref(),
            Some("Showing 8 of 12 recommendations")
        );
        assert_eq!(panel.cards()[7].name, "Song 7");
    }

    #[test]
    fn test_short_list_shows_all() {
        let tracks: Vec<Track> = (0..3).map(track).collect();
        let panel = RecommendationPanel::project(Some(tracks.as_slice()));
        assert_eq!(panel.cards().len(), 3);
        assert_eq!(
            panel.summary().as_deref(),
            Some("Showing 3 of 3 recommendations")
        );
    }

    #[test]
    fn test_accent_cycles_through_palette() {
        let tracks: Vec<Track> = (0..8).map(track).collect();
        let panel = RecommendationPanel::project(Some(tracks.as_slice()));
        let accents: Vec<usize> = panel.cards().iter().map(|c| c.accent).collect();
        assert_eq!(accents, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_optional_fields_map_to_fallbacks() {
        let mut with_all = track(0);
        with_all.image_url = Some("https://img/1".into());
        with_all.external_url = Some("https://open.spotify.com/track/1".into());
        with_all.preview_url = Some("https://p.scdn.co/mp3-preview/1".into());
        with_all.popularity = 140;
        let mut blank = track(1);
        blank.image_url = Some("  ".into());

        let panel = RecommendationPanel::project(Some(&[with_all, blank][..]));
        let cards = panel.cards();

        assert_eq!(cards[0].cover, Cover::Image("https://img/1".into()));
        assert_eq!(
            cards[0].link.as_deref(),
            Some("https://open.spotify.com/track/1")
        );
        assert_eq!(
            cards[0].preview,
            Preview::Audio("https://p.scdn.co/mp3-preview/1".into())
        );
        assert_eq!(cards[0].popularity, 100);

        assert_eq!(cards[1].cover, Cover::Glyph('♪'));
        assert!(cards[1].link.is_none());
        assert_eq!(cards[1].preview, Preview::Unavailable);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let tracks: Vec<Track> = (0..10).map(track).collect();
        assert_eq!(
            RecommendationPanel::project(Some(tracks.as_slice())),
            RecommendationPanel::project(Some(tracks.as_slice()))
        );
    }
}
