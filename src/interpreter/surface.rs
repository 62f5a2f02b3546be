/// Line-oriented sink for everything the interpreter displays.
pub trait DisplaySurface {
    fn writeln(&mut self, text: &str);
}

pub struct StdioSurface;

impl DisplaySurface for StdioSurface {
    fn writeln(&mut self, text: &str) {
        println!("{text}");
    }
}

#[derive(Debug, Default)]
pub struct BufferedSurface {
    buffer: String,
}

impl BufferedSurface {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn data(&self) -> &str {
        &self.buffer
    }

    pub fn into_data(self) -> String {
        self.buffer
    }
}

impl DisplaySurface for BufferedSurface {
    fn writeln(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}
