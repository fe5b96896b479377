// src/config/state.rs
//
// All view state in one place. Frontends send a Msg; `update` is the only
// thing that mutates.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Standings,
    Teams,
    Players,
    Games,
}

impl Tab {
    /// Display order of the tab strip.
    pub const ALL: [Tab; 4] = [Tab::Standings, Tab::Teams, Tab::Players, Tab::Games];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Standings => "Standings",
            Tab::Teams     => "Team Stats",
            Tab::Players   => "Players",
            Tab::Games     => "Today's Games",
        }
    }

    /// Lowercase key used on the command line and in logs.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Standings => "standings",
            Tab::Teams     => "teams",
            Tab::Players   => "players",
            Tab::Games     => "games",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    SelectTab(Tab),
    /// Team-stats row index (header excluded).
    ToggleTeam(usize),
    Refresh,
}

/// What the frontend should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub expanded_team: Option<usize>,
}

impl UiState {
    pub fn update(&mut self, msg: Msg) -> Effect {
        match msg {
            Msg::SelectTab(tab) => {
                if tab != self.active_tab {
                    logd!("UI: Tab switch {:?} → {:?}", self.active_tab, tab);
                    self.active_tab = tab;
                }
                Effect::None
            }
            Msg::ToggleTeam(ix) => {
                self.expanded_team = match self.expanded_team {
                    Some(open) if open == ix => None,
                    _ => Some(ix),
                };
                Effect::None
            }
            Msg::Refresh => Effect::Fetch,
        }
    }

    pub fn is_expanded(&self, ix: usize) -> bool {
        self.expanded_team == Some(ix)
    }
}
