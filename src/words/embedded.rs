//! Embedded word list
//!
//! Common English words, 5 to 12 letters, compiled into the binary.

/// Candidate secret words
pub const WORDS: &[&str] = &[
    "abandon",
    "absolute",
    "adventure",
    "airplane",
    "alphabet",
    "anchor",
    "ancient",
    "animal",
    "apple",
    "architect",
    "artist",
    "atmosphere",
    "autumn",
    "balance",
    "balloon",
    "banana",
    "basket",
    "beacon",
    "beautiful",
    "bicycle",
    "blanket",
    "bottle",
    "boulder",
    "breakfast",
    "bridge",
    "bright",
    "brother",
    "butterfly",
    "cabinet",
    "camera",
    "candle",
    "captain",
    "carpet",
    "castle",
    "celebration",
    "channel",
    "chapter",
    "chicken",
    "chimney",
    "chocolate",
    "circle",
    "citizen",
    "cloudy",
    "coffee",
    "comfortable",
    "compass",
    "computer",
    "conversation",
    "country",
    "courage",
    "crystal",
    "curtain",
    "danger",
    "daughter",
    "december",
    "delicious",
    "diamond",
    "dictionary",
    "dinner",
    "discovery",
    "distance",
    "doctor",
    "dragon",
    "drawer",
    "elephant",
    "emerald",
    "energy",
    "engine",
    "evening",
    "exercise",
    "familiar",
    "famous",
    "feather",
    "festival",
    "finger",
    "flower",
    "forest",
    "fortune",
    "freedom",
    "friend",
    "garden",
    "gather",
    "giraffe",
    "glacier",
    "gravity",
    "guitar",
    "hammer",
    "harbor",
    "harvest",
    "helmet",
    "history",
    "holiday",
    "horizon",
    "hospital",
    "hunter",
    "imagine",
    "important",
    "island",
    "jacket",
    "journey",
    "jungle",
    "kitchen",
    "ladder",
    "lantern",
    "laughter",
    "lemonade",
    "library",
    "lightning",
    "listen",
    "luggage",
    "machine",
    "magnet",
    "marble",
    "market",
    "meadow",
    "medicine",
    "melody",
    "memory",
    "midnight",
    "minute",
    "mirror",
    "mississippi",
    "moment",
    "monster",
    "morning",
    "mountain",
    "museum",
    "mystery",
    "nature",
    "needle",
    "neighbor",
    "number",
    "ocean",
    "october",
    "orange",
    "orchard",
    "orchestra",
    "ordinary",
    "oxygen",
    "painting",
    "paradise",
    "pencil",
    "penguin",
    "people",
    "pepper",
    "picture",
    "pillow",
    "planet",
    "pocket",
    "practice",
    "present",
    "pumpkin",
    "puzzle",
    "question",
    "quiet",
    "rabbit",
    "rainbow",
    "reason",
    "remember",
    "ribbon",
    "river",
    "rocket",
    "sandwich",
    "saturday",
    "science",
    "season",
    "secret",
    "shadow",
    "shelter",
    "silence",
    "silver",
    "simple",
    "sister",
    "smile",
    "spider",
    "spirit",
    "spring",
    "square",
    "stadium",
    "station",
    "stone",
    "storm",
    "story",
    "stranger",
    "street",
    "strong",
    "summer",
    "sunset",
    "surprise",
    "table",
    "teacher",
    "telescope",
    "temperature",
    "theater",
    "thunder",
    "ticket",
    "tiger",
    "tomorrow",
    "tornado",
    "treasure",
    "triangle",
    "trumpet",
    "tunnel",
    "turtle",
    "umbrella",
    "universe",
    "valley",
    "vegetable",
    "victory",
    "village",
    "violin",
    "volcano",
    "voyage",
    "warrior",
    "water",
    "weather",
    "whisper",
    "window",
    "winter",
    "wonder",
    "yellow",
    "zephyr",
];
