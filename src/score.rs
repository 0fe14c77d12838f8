use serde::Deserialize;

/// Tag de message attendu du host (format hérité des messages H5P).
const SCORE_MESSAGE_TAG: &str = "H5P_SCORE_RESULT";

/// Enveloppe brute d'un message entrant. Champs optionnels : un message
/// incomplet est simplement ignoré.
#[derive(Debug, Deserialize)]
struct RawMessage<'a> {
    #[serde(rename = "type")]
    tag: &'a str,
    score: Option<u32>,
    #[serde(rename = "maxScore")]
    max_score: Option<u32>,
}

/// Notification de score validée, prête à être appliquée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub score: u32,
    pub max_score: u32,
}

impl ScoreEvent {
    /// Décode un message JSON du host. Retourne `None` pour tout message
    /// malformé, de mauvais tag ou incomplet (aucun changement d'état).
    pub fn from_message(raw: &str) -> Option<Self> {
        let msg: RawMessage = serde_json::from_str(raw).ok()?;
        if msg.tag != SCORE_MESSAGE_TAG {
            return None;
        }
        Some(Self {
            score: msg.score?,
            max_score: msg.max_score?,
        })
    }
}

/// Dernier score reçu, et les booléens dérivés consommés par le cœur.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    score: u32,
    max_score: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ScoreEvent) {
        self.score = event.score;
        self.max_score = event.max_score;
    }

    /// Condition de tir : score parfait.
    #[inline(always)]
    pub fn is_perfect(&self) -> bool {
        self.max_score > 0 && self.score == self.max_score
    }

    /// `max_score == 0` signifie « pas encore de score ».
    #[inline(always)]
    pub fn has_score(&self) -> bool {
        self.max_score > 0
    }

    /// Pourcentage de réussite, `None` tant qu'aucun score n'est reçu
    /// (garde contre la division par zéro).
    pub fn percentage(&self) -> Option<f32> {
        if self.max_score == 0 {
            return None;
        }
        Some(self.score as f32 / self.max_score as f32 * 100.0)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }
}
