/// ↑ ↑ ↓ ↓ ← → ← → B A, as `KeyboardEvent.key` values.
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Tracks progress through a key sequence. Any wrong key starts over from
/// scratch, including a wrong key that would itself begin the sequence.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    sequence: &'static [&'static str],
    index: usize,
}

impl SequenceMatcher {
    pub fn new(sequence: &'static [&'static str]) -> Self {
        Self { sequence, index: 0 }
    }

    pub fn konami() -> Self {
        Self::new(&KONAMI_CODE)
    }

    /// Feed one key; `true` when it completes the sequence.
    pub fn press(&mut self, key: &str) -> bool {
        if self.sequence.get(self.index).copied() == Some(key) {
            self.index += 1;
            if self.index == self.sequence.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.index
    }
}
