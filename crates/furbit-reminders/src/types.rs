use serde::Serialize;

/// Outcome of one generation pass.
///
/// Wire field names (`remindersCreated`, …) match what the app's trigger
/// screen already parses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    pub success: bool,
    pub reminders_created: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one delivery pass.
///
/// `reminders_sent` counts records attempted, not successful sends; a batch
/// of five where every send failed still reports 5.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySummary {
    pub success: bool,
    pub reminders_sent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Combined outcome of one full generate-then-deliver run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(rename = "checkResult")]
    pub generation: GenerationSummary,
    #[serde(rename = "sendResult")]
    pub delivery: DeliverySummary,
    pub total_processed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_the_app() {
        let summary = RunSummary {
            generation: GenerationSummary {
                success: true,
                reminders_created: 2,
                error: None,
            },
            delivery: DeliverySummary {
                success: false,
                reminders_sent: 2,
                error: Some("boom".to_string()),
            },
            total_processed: 4,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["checkResult"]["remindersCreated"], 2);
        assert!(json["checkResult"].get("error").is_none());
        assert_eq!(json["sendResult"]["remindersSent"], 2);
        assert_eq!(json["sendResult"]["error"], "boom");
        assert_eq!(json["totalProcessed"], 4);
    }
}
