use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{event, Level};

use crate::{config::Config, occupancy::OccupancyStatus, panel::Panel};

const GET_OCCUPANCY: &str = "/get_occupancy";

/// One poll cycle failed. Connection errors, non-2xx statuses, and bodies
/// that do not decode into [`OccupancyStatus`] all end up here; the caller
/// logs it and waits for the next cycle.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("occupancy fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Issue `GET /get_occupancy` against the configured server. Plain request:
/// no headers, no body, no query parameters.
pub async fn fetch_occupancy(
    client: &Client,
    base_url: &str,
) -> Result<OccupancyStatus, PollError> {
    let url = format!("{}{}", base_url, GET_OCCUPANCY);
    let status = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<OccupancyStatus>()
        .await?;
    Ok(status)
}

/// Mirror a freshly fetched status onto the panel. Every slot is rewritten
/// on every call; nothing is compared against what was shown before.
pub fn apply_status(panel: &mut impl Panel, status: &OccupancyStatus) {
    panel.set_occupancy(status.occupancy);
    panel.set_max_occupancy(status.max_occupancy);
    panel.set_alert_visible(status.at_capacity());
}

/// Fetch once and update the panel. On failure the panel keeps whatever it
/// showed last.
pub async fn poll_cycle(
    client: &Client,
    base_url: &str,
    panel: &mut impl Panel,
) -> Result<(), PollError> {
    let status = fetch_occupancy(client, base_url).await?;
    apply_status(panel, &status);
    Ok(())
}

/// Poll forever. The first poll lands one full interval after startup, and
/// a failed cycle only produces an ERROR event before the loop sleeps again.
pub async fn run(config: &Config, client: &Client, panel: &mut impl Panel) {
    let interval = Duration::from_secs(config.interval_seconds);
    loop {
        tokio::time::sleep(interval).await;
        if let Err(e) = poll_cycle(client, &config.server_url, panel).await {
            event!(Level::ERROR, "Error fetching occupancy data | {}", e);
        }
    }
}

#[cfg(test)]
mod test {
    use super::apply_status;
    use crate::occupancy::OccupancyStatus;
    use crate::panel::Panel;

    /// Records what the poller wrote, in the text form a reader would see.
    #[derive(Default)]
    struct FakePanel {
        occupancy: Option<String>,
        max_occupancy: Option<String>,
        alert_visible: Option<bool>,
    }

    impl Panel for FakePanel {
        fn set_occupancy(&mut self, value: u32) {
            self.occupancy = Some(value.to_string());
        }

        fn set_max_occupancy(&mut self, value: u32) {
            self.max_occupancy = Some(value.to_string());
        }

        fn set_alert_visible(&mut self, visible: bool) {
            self.alert_visible = Some(visible);
        }
    }

    #[test]
    fn below_threshold_hides_alert() {
        let mut panel = FakePanel::default();
        let status = OccupancyStatus {
            occupancy: 3,
            max_occupancy: 5,
        };

        apply_status(&mut panel, &status);

        assert_eq!(Some("3"), panel.occupancy.as_deref());
        assert_eq!(Some("5"), panel.max_occupancy.as_deref());
        assert_eq!(Some(false), panel.alert_visible);
    }

    #[test]
    fn reaching_threshold_shows_alert() {
        let mut panel = FakePanel::default();
        let status = OccupancyStatus {
            occupancy: 5,
            max_occupancy: 5,
        };

        apply_status(&mut panel, &status);

        assert_eq!(Some("5"), panel.occupancy.as_deref());
        assert_eq!(Some("5"), panel.max_occupancy.as_deref());
        assert_eq!(Some(true), panel.alert_visible);
    }

    #[test]
    fn exceeding_threshold_shows_alert() {
        let mut panel = FakePanel::default();
        let status = OccupancyStatus {
            occupancy: 12,
            max_occupancy: 5,
        };

        apply_status(&mut panel, &status);

        assert_eq!(Some(true), panel.alert_visible);
    }

    #[test]
    fn alert_clears_when_count_drops() {
        let mut panel = FakePanel::default();

        apply_status(
            &mut panel,
            &OccupancyStatus {
                occupancy: 5,
                max_occupancy: 5,
            },
        );
        assert_eq!(Some(true), panel.alert_visible);

        apply_status(
            &mut panel,
            &OccupancyStatus {
                occupancy: 4,
                max_occupancy: 5,
            },
        );
        assert_eq!(Some("4"), panel.occupancy.as_deref());
        assert_eq!(Some(false), panel.alert_visible);
    }
}
