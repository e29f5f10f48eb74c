use serde::{Deserialize, Serialize};

use crate::communication::messages::LightEvent;

/// How events are turned into console lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationFormat {
    /// Human readable narration.
    #[default]
    Text,
    /// One JSON object per event.
    JsonLines,
}

/// Renders [`LightEvent`]s for display. Holds no state beyond the format, so
/// the cascade can run silently and be narrated afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    format: NarrationFormat,
}

impl Narrator {
    pub fn new(format: NarrationFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> NarrationFormat {
        self.format
    }

    /// Lines for a single event. A text crossing banner is preceded by a blank line.
    pub fn render(&self, event: &LightEvent) -> Result<Vec<String>, serde_json::Error> {
        match self.format {
            NarrationFormat::Text => Ok(text_lines(event)),
            NarrationFormat::JsonLines => Ok(vec![serde_json::to_string(event)?]),
        }
    }

    pub fn render_all(&self, events: &[LightEvent]) -> Result<Vec<String>, serde_json::Error> {
        let mut lines = Vec::with_capacity(events.len());
        for event in events {
            lines.extend(self.render(event)?);
        }
        Ok(lines)
    }
}

fn text_lines(event: &LightEvent) -> Vec<String> {
    match event {
        LightEvent::CrossingRequested { at, light, colour } => vec![
            String::new(),
            format!("***  at {} a car wants to cross light {}, with colour: {}", at, light, colour),
        ],
        LightEvent::ColourChanged { at, light, colour } => {
            vec![format!("     at {} {} changes colour to {}", at, light, colour)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::light::LightColour;
    use crate::models::time::Time;

    fn sample() -> Vec<LightEvent> {
        vec![
            LightEvent::CrossingRequested {
                at: Time::new(0, 0, 0),
                light: "A".to_string(),
                colour: LightColour::Red,
            },
            LightEvent::ColourChanged {
                at: Time::new(0, 0, 5),
                light: "A".to_string(),
                colour: LightColour::Yellow,
            },
        ]
    }

    #[test]
    fn text_narration() {
        let narrator = Narrator::default();
        assert_eq!(narrator.format(), NarrationFormat::Text);
        let lines = narrator.render_all(&sample()).unwrap();
        assert_eq!(
            lines,
            vec![
                "".to_string(),
                "***  at 0:0:0 a car wants to cross light A, with colour: red".to_string(),
                "     at 0:0:5 A changes colour to yellow".to_string(),
            ]
        );
    }

    #[test]
    fn json_lines_narration() {
        let narrator = Narrator::new(NarrationFormat::JsonLines);
        assert_eq!(narrator.format(), NarrationFormat::JsonLines);
        let lines = narrator.render_all(&sample()).unwrap();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["event"], "crossing_requested");
        assert_eq!(first["colour"], "red");
        let second: LightEvent = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second, sample()[1]);
    }
}
