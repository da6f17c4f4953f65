use wordbingo_core::Position;
use wordbingo_game::Session;

// AppState holds the session state the user is building up across the
// three screens. It lives for exactly one run of the application.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: Session,
    pub(crate) selected_cell: Option<Position>,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            session: Session::new(),
            selected_cell: None,
        }
    }
}
