use clap::Parser;
use fukidashi::resolver::Resolver;
use fukidashi::schema::{ASPECT_RATIOS, BORDER_WIDTH_TOKENS, BubbleSize, SIZE_TOKENS, SPACING_TOKENS};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random Flex Message documents for the resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_message.json")]
    output: String,

    /// Number of bubbles. One produces a bubble, more produce a carousel
    #[arg(short, long, default_value_t = 1)]
    bubbles: usize,

    /// Maximum nesting depth of boxes
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Maximum number of children per box
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Sprinkle components with unrecognized types into the tree
    #[arg(long)]
    unknown: bool,

    /// Resolve the generated document before writing it
    #[arg(long)]
    check: bool,
}

struct Generator {
    rng: ThreadRng,
    depth: usize,
    width: usize,
    unknown: bool,
}

const COLORS: [&str; 6] = ["#111111", "#ffffff", "#06c755", "#ff334b", "#aaaaaa", "#1f6feb"];
const LAYOUTS: [&str; 3] = ["vertical", "horizontal", "baseline"];
const WORDS: [&str; 10] = [
    "Shipping", "Tokyo", "Order", "Total", "Receipt", "Coffee", "Ticket", "Hotel", "Gate", "Seat",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.depth == 0 || cli.width == 0 {
        eprintln!("Error: --depth and --width must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating flex message ({} bubble(s), depth {}, up to {} children per box)...",
        cli.bubbles, cli.depth, cli.width
    );

    let mut generator = Generator {
        rng: rand::rng(),
        depth: cli.depth,
        width: cli.width,
        unknown: cli.unknown,
    };
    let message = generator.message(cli.bubbles);

    if cli.check {
        let resolved = Resolver::default().resolve_value(message.clone())?;
        println!(
            "-> Resolved {} node(s) across {} bubble(s).",
            resolved.kind_counts().values().sum::<usize>(),
            resolved.bubbles().len()
        );
    }

    let json_output = serde_json::to_string_pretty(&message)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved message to '{}'", cli.output);

    Ok(())
}

impl Generator {
    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn maybe(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    fn words(&mut self, count: usize) -> String {
        (0..count).map(|_| self.pick(&WORDS)).collect::<Vec<_>>().join(" ")
    }

    fn action(&mut self) -> Value {
        match self.rng.random_range(0..3) {
            0 => json!({ "type": "uri", "label": self.words(1), "uri": "https://example.com" }),
            1 => json!({ "type": "message", "label": self.words(1), "text": self.words(3) }),
            _ => json!({ "type": "postback", "label": self.words(1), "data": "action=buy&id=1" }),
        }
    }

    fn message(&mut self, bubbles: usize) -> Value {
        let contents = if bubbles == 1 {
            self.bubble()
        } else {
            let items: Vec<Value> = (0..bubbles).map(|_| self.bubble()).collect();
            json!({ "type": "carousel", "contents": items })
        };
        json!({ "type": "flex", "altText": self.words(2), "contents": contents })
    }

    fn bubble(&mut self) -> Value {
        let sizes: Vec<&'static str> = BubbleSize::ALL.iter().map(|s| s.as_str()).collect();
        let mut bubble = json!({ "type": "bubble", "size": self.pick(&sizes) });
        if self.maybe(0.5) {
            bubble["header"] = self.boxed(1);
        }
        if self.maybe(0.5) {
            bubble["hero"] = self.image();
        }
        bubble["body"] = self.boxed(0);
        if self.maybe(0.5) {
            bubble["footer"] = json!({
                "type": "box",
                "layout": "vertical",
                "spacing": "sm",
                "contents": [self.button(), self.button()],
            });
        }
        if self.maybe(0.3) {
            bubble["styles"] = json!({ "body": { "backgroundColor": self.pick(&COLORS) } });
        }
        bubble
    }

    fn boxed(&mut self, level: usize) -> Value {
        let count = self.rng.random_range(1..=self.width);
        let contents: Vec<Value> = (0..count).map(|_| self.component(level + 1)).collect();
        let mut node = json!({
            "type": "box",
            "layout": self.pick(&LAYOUTS),
            "contents": contents,
        });
        if self.maybe(0.6) {
            node["spacing"] = json!(self.pick(&SPACING_TOKENS));
        }
        if self.maybe(0.3) {
            node["paddingAll"] = json!(self.pick(&SPACING_TOKENS));
        }
        if self.maybe(0.2) {
            node["borderWidth"] = json!(self.pick(&BORDER_WIDTH_TOKENS));
            node["borderColor"] = json!(self.pick(&COLORS));
        }
        if self.maybe(0.2) {
            node["background"] = json!({
                "type": "linearGradient",
                "angle": "90deg",
                "startColor": self.pick(&COLORS),
                "endColor": self.pick(&COLORS),
            });
        }
        if self.maybe(0.1) {
            node["action"] = self.action();
        }
        node
    }

    fn component(&mut self, level: usize) -> Value {
        if self.unknown && self.maybe(0.05) {
            return json!({ "type": "carouselItem", "text": self.words(1) });
        }
        let roll = self.rng.random_range(0..10);
        match roll {
            0 if level < self.depth => self.boxed(level),
            0 | 1 | 2 => self.text(),
            3 => self.button(),
            4 => json!({ "type": "filler" }),
            5 => json!({
                "type": "icon",
                "url": "https://example.com/icon.png",
                "size": self.pick(&SIZE_TOKENS),
            }),
            6 => self.image(),
            7 => json!({ "type": "separator", "margin": self.pick(&SPACING_TOKENS) }),
            8 => json!({ "type": "spacer", "size": self.pick(&SIZE_TOKENS) }),
            _ => self.text(),
        }
    }

    fn text(&mut self) -> Value {
        let word_count = self.rng.random_range(1..6);
        let mut node = json!({
            "type": "text",
            "text": self.words(word_count),
            "size": self.pick(&SIZE_TOKENS),
            "color": self.pick(&COLORS),
        });
        if self.maybe(0.3) {
            node["wrap"] = json!(true);
            node["maxLines"] = json!(self.rng.random_range(1..4));
        }
        if self.maybe(0.2) {
            node["contents"] = json!([
                { "type": "span", "text": self.words(1), "weight": "bold" },
                { "type": "span", "text": self.words(1), "decoration": "underline" },
            ]);
        }
        if self.maybe(0.2) {
            node["flex"] = json!(self.rng.random_range(0..5));
        }
        node
    }

    fn button(&mut self) -> Value {
        json!({
            "type": "button",
            "style": self.pick(&["link", "primary", "secondary"]),
            "height": self.pick(&["sm", "md"]),
            "action": self.action(),
        })
    }

    fn image(&mut self) -> Value {
        json!({
            "type": "image",
            "url": "https://example.com/image.jpg",
            "size": self.pick(&["full", "md", "lg", "xl"]),
            "aspectRatio": self.pick(&ASPECT_RATIOS),
            "aspectMode": self.pick(&["cover", "fit"]),
        })
    }
}
