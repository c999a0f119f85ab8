use rigcode::{ChunkSummary, ParseResultVerbose, RigAttributes, format_horsepower};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &ParseResultVerbose, key: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    print_scan(res, &palette);

    println!("\n{}", palette.paint("━━━ Chunks ━━━", ansi::GRAY));
    if res.details.chunks.is_empty() {
        println!("{}", palette.dim("  No chunks to peel"));
    }
    for chunk in &res.details.chunks {
        println!("  {}", fmt_chunk(chunk, &palette));
    }

    println!("\n{}", palette.paint("━━━ Attributes ━━━", ansi::GRAY));
    print_attributes(&res.attributes, &palette);

    println!("\n{}", palette.paint("━━━ Model key ━━━", ansi::GRAY));
    if key.is_empty() {
        println!("  {}", palette.dim("(empty)"));
    } else {
        println!("  {}", palette.bold(palette.paint(key, ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Parse: {}", palette.paint(format!("{:?}", res.details.elapsed), ansi::GREEN));
    println!();
}

fn print_scan(res: &ParseResultVerbose, palette: &ansi::Palette) {
    let details = &res.details;
    let hp = match details.horsepower {
        Some(hp) => palette.paint(format!("{} HP", format_horsepower(hp)), ansi::YELLOW),
        None => palette.dim("none"),
    };
    println!("  {} {}", palette.paint("Horsepower:", ansi::BLUE), hp);

    let counter = match &details.counter_rotation {
        Some(rule) => palette.paint(rule, ansi::CYAN),
        None => palette.dim("no"),
    };
    println!("  {} {}", palette.paint("Counter rotation:", ansi::BLUE), counter);

    if let Some(shaft) = details.shaft_suffix {
        println!("  {} {}", palette.paint("Shaft suffix:", ansi::BLUE), palette.paint(shaft.as_str(), ansi::YELLOW));
    }
    if details.inferred_power_trim {
        println!("  {}", palette.dim("PT added: standard at this horsepower"));
    }
}

fn fmt_chunk(chunk: &ChunkSummary, palette: &ansi::Palette) -> String {
    if chunk.stopword {
        return format!("{} {}", palette.paint(&chunk.text, ansi::YELLOW), palette.dim("(skipped)"));
    }

    let codes: Vec<&str> = chunk.codes.iter().map(|c| c.as_str()).collect();
    let mut line = format!(
        "{} {} {}",
        palette.paint(&chunk.text, ansi::YELLOW),
        palette.dim("→"),
        if codes.is_empty() { palette.dim("∅") } else { palette.paint(codes.join(" "), ansi::GREEN) },
    );
    if !chunk.rules.is_empty() {
        let steps: Vec<String> =
            chunk.pieces.iter().zip(&chunk.rules).map(|(piece, rule)| format!("{piece}: {rule}")).collect();
        line.push_str(&format!("  {}", palette.dim(format!("[{}]", steps.join(", ")))));
    }
    if let Some(dropped) = &chunk.dropped {
        line.push_str(&format!("  {} {}", palette.dim("dropped:"), palette.paint(dropped, ansi::GRAY)));
    }
    line
}

fn print_attributes(attrs: &RigAttributes, palette: &ansi::Palette) {
    let field = |name: &str, value: String| println!("  {} {}", palette.dim(format!("{name:<18}")), value);

    field("tokens", palette.bold(palette.paint(attrs.token_strs().join(" "), ansi::GREEN)));
    field("shaft", format!("{} ({}\")", attrs.shaft_code, attrs.shaft_inches));
    field("start", format!("{:?}", attrs.start_type));
    field("control", format!("{:?}", attrs.control_type));
    field("power trim", attrs.has_power_trim.to_string());
    field("command thrust", attrs.has_command_thrust.to_string());
    field("counter rotating", attrs.is_counter_rotating.to_string());
}
