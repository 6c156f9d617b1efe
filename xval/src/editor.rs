use reedline::{DefaultPrompt, DefaultPromptSegment, Emacs, Reedline, Signal};

/// Line editor for the interactive prompt.
pub struct Editor {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl Default for Editor {
    fn default() -> Self {
        let editor = Reedline::create().with_edit_mode(Box::new(Emacs::default()));
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("xval".to_string()),
            DefaultPromptSegment::Empty,
        );

        Self { editor, prompt }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EditorRead {
    Read(String),
    Break,
    Continue,
}

impl From<Signal> for EditorRead {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Success(input) if input.trim().is_empty() => Self::Continue,
            Signal::Success(input) => Self::Read(input),
            Signal::CtrlC | Signal::CtrlD => Self::Break,
        }
    }
}

impl Editor {
    pub fn read(&mut self) -> std::io::Result<EditorRead> {
        self.editor.read_line(&self.prompt).map(EditorRead::from)
    }
}
