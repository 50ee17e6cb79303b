use serde::{Deserialize, Serialize};

/// Non-fatal message shown alongside the results of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    FetchError,
    PartialResults,
}

impl Notice {
    pub fn for_results(received: usize, omitted: usize) -> Option<Notice> {
        if received == 0 {
            Some(Notice::FetchError)
        } else if omitted > 0 {
            Some(Notice::PartialResults)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::FetchError => "Error fetching places!",
            Notice::PartialResults => "Some places were omitted due to error!",
        }
    }
}
