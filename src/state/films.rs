//! Film records for the filmography block and the selection state that
//! drives the carousel and its detail panel.

use serde::Deserialize;

/// Placeholder shown where the film archive is still missing a detail.
pub const DETAILS_TBA: &str = "Details coming soon";

/// How many award pills fit on a carousel card before the "+N" overflow.
pub const CARD_AWARD_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub festival: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

impl Award {
    /// Short form shown on the carousel cards.
    pub fn pill(&self) -> String {
        [self.status.as_deref(), self.festival.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Long form shown in the detail panel.
    pub fn line(&self) -> String {
        [
            self.status.clone(),
            self.festival.clone(),
            self.city.as_ref().map(|city| format!("({city})")),
            self.year.map(|year| year.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub logline: Option<String>,
    #[serde(default)]
    pub writer: Option<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub dop: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub video_embed_url: Option<String>,
    #[serde(default)]
    pub video_page_url: Option<String>,
}

impl FilmRecord {
    pub fn poster_initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|letter| letter.to_string())
            .unwrap_or_else(|| "F".to_string())
    }

    pub fn meta_line(&self) -> String {
        let year = self
            .year
            .map(|year| year.to_string())
            .unwrap_or_else(|| DETAILS_TBA.to_string());
        let city = self.city.as_deref().unwrap_or(DETAILS_TBA);
        format!("{year} · {city}")
    }

    pub fn credit_lines(&self) -> Vec<String> {
        let directors = if self.directors.is_empty() {
            DETAILS_TBA.to_string()
        } else {
            self.directors.join(", ")
        };
        let mut lines = vec![
            format!("Written by: {}", self.writer.as_deref().unwrap_or(DETAILS_TBA)),
            format!("Directed by: {directors}"),
            format!(
                "Cinematography: {}",
                self.dop.as_deref().unwrap_or(DETAILS_TBA)
            ),
        ];
        if let Some(editor) = &self.editor {
            lines.push(format!("Edited by: {editor}"));
        }
        lines
    }

    /// External link target: the film's own page when known, the raw
    /// embed URL otherwise. `None` hides the link.
    pub fn watch_url(&self) -> Option<&str> {
        self.video_page_url
            .as_deref()
            .or(self.video_embed_url.as_deref())
    }

    /// Awards that fit on the card plus how many were cut off.
    pub fn card_awards(&self) -> (&[Award], usize) {
        let shown = self.awards.len().min(CARD_AWARD_LIMIT);
        (&self.awards[..shown], self.awards.len() - shown)
    }
}

/// The loaded filmography plus the single active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmShelf {
    films: Vec<FilmRecord>,
    active: usize,
}

impl FilmShelf {
    /// The first film starts out selected; an empty archive has nothing
    /// to show.
    pub fn new(films: Vec<FilmRecord>) -> Option<Self> {
        if films.is_empty() {
            None
        } else {
            Some(Self { films, active: 0 })
        }
    }

    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn active(&self) -> &FilmRecord {
        &self.films[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    /// Switches the selection, reporting whether anything changed so the
    /// caller can skip re-rendering when the active card is clicked again.
    pub fn select(&mut self, id: &str) -> bool {
        match self.films.iter().position(|film| film.id == id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: &str) -> FilmRecord {
        serde_json::from_str(&format!(r#"{{"id": "{id}", "title": "Title"}}"#)).unwrap()
    }

    #[test]
    fn records_decode_from_camel_case_json() {
        let raw = r#"{
            "id": "paper-swans",
            "title": "Paper Swans",
            "year": 2024,
            "city": "Bristol",
            "logline": "A folded bird goes missing.",
            "writer": "M. Hale",
            "directors": ["A. Reyes", "T. Okafor"],
            "dop": "S. Lindqvist",
            "synopsis": "Shot over one summer term.",
            "awards": [{"status": "Winner", "festival": "Young Lens", "city": "Leeds", "year": 2024}],
            "videoEmbedUrl": "https://video.example/embed/ps",
            "videoPageUrl": "https://video.example/ps"
        }"#;
        let record: FilmRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.directors.len(), 2);
        assert_eq!(record.editor, None);
        assert_eq!(record.watch_url(), Some("https://video.example/ps"));
        assert_eq!(record.awards[0].line(), "Winner, Young Lens, (Leeds), 2024");
    }

    #[test]
    fn missing_details_fall_back_to_placeholders() {
        let record = film("bare");
        assert_eq!(record.meta_line(), format!("{DETAILS_TBA} · {DETAILS_TBA}"));
        assert_eq!(
            record.credit_lines(),
            vec![
                format!("Written by: {DETAILS_TBA}"),
                format!("Directed by: {DETAILS_TBA}"),
                format!("Cinematography: {DETAILS_TBA}"),
            ]
        );
        assert_eq!(record.watch_url(), None);
        assert_eq!(record.poster_initial(), "T");
    }

    #[test]
    fn card_awards_split_off_the_overflow() {
        let mut record = film("laurels");
        record.awards = (0..5)
            .map(|i| Award {
                status: Some(format!("Finalist {i}")),
                festival: None,
                city: None,
                year: None,
            })
            .collect();
        let (shown, extra) = record.card_awards();
        assert_eq!(shown.len(), 2);
        assert_eq!(extra, 3);
        assert_eq!(shown[0].pill(), "Finalist 0");

        record.awards.truncate(1);
        let (shown, extra) = record.card_awards();
        assert_eq!(shown.len(), 1);
        assert_eq!(extra, 0);
    }

    #[test]
    fn shelf_opens_on_the_first_film() {
        let shelf = FilmShelf::new(vec![film("a"), film("b")]).unwrap();
        assert!(shelf.is_active("a"));
        assert!(FilmShelf::new(Vec::new()).is_none());
    }

    #[test]
    fn selection_changes_once_per_distinct_id() {
        let mut shelf = FilmShelf::new(vec![film("a"), film("b"), film("c")]).unwrap();
        assert!(shelf.select("c"));
        assert!(shelf.is_active("c"));
        assert!(!shelf.select("c"), "re-selecting the active film is a no-op");
        assert!(!shelf.select("missing"));
        assert!(shelf.is_active("c"));
    }
}
