use console::Style;
use internity::model::Status;
use once_cell::sync::Lazy;

pub struct Theme {
    pub banner: Style,
    pub heading: Style,
    pub rule: Style,
    pub index: Style,
    pub label: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub overdue: Style,
    status_open: Style,
    status_active: Style,
    status_won: Style,
    status_lost: Style,
}

impl Theme {
    pub fn status(&self, status: Status) -> &Style {
        match status {
            Status::Pending | Status::Interested => &self.status_open,
            Status::Applied | Status::Interviewing => &self.status_active,
            Status::Offer | Status::Accepted => &self.status_won,
            Status::Rejected => &self.status_lost,
        }
    }
}

pub static INTERNITY_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().cyan().bold(),
    heading: Style::new().bold(),
    rule: Style::new().dim(),
    index: Style::new().yellow(),
    label: Style::new().bold(),
    info: Style::new(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
    overdue: Style::new().red().bold(),
    status_open: Style::new(),
    status_active: Style::new().cyan(),
    status_won: Style::new().green(),
    status_lost: Style::new().red(),
});
