// Data assets are served from the site origin both under `trunk serve`
// and in production, so a relative path works everywhere.
pub fn films_data_url() -> &'static str {
    "assets/data/films.json"
}
