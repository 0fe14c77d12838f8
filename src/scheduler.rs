use log::debug;

/// État de la boucle de rendu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Aucune frame traitée : l'état économe en ressources.
    Idle,
    /// Exactement une frame par tick du pilote de rendu externe.
    Running,
}

/// Décide, une fois par frame, si la boucle de rendu continue ou se suspend.
///
/// La suspension n'a lieu qu'à la frontière entre deux frames, jamais en
/// cours de frame : un feu d'artifice lancé termine toujours toutes ses
/// frames.
#[derive(Debug)]
pub struct AnimationScheduler {
    state: LoopState,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
        }
    }

    /// Idle -> Running : un événement de score vient d'arriver.
    pub fn notify_score_event(&mut self) {
        if self.state == LoopState::Idle {
            debug!("scheduler: Idle -> Running (score event)");
        }
        self.state = LoopState::Running;
    }

    /// Évalué après la fin complète d'une frame : ne passe en Idle que si
    /// plus rien n'anime (`has_activity`) et qu'aucune condition externe de
    /// maintien (`keep_alive`, ex. un score valide affiché) ne tient.
    pub fn frame_done(&mut self, has_activity: bool, keep_alive: bool) -> LoopState {
        let next = if has_activity || keep_alive {
            LoopState::Running
        } else {
            LoopState::Idle
        };

        if next != self.state {
            debug!("scheduler: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline(always)]
    pub fn state(&self) -> LoopState {
        self.state
    }
}
