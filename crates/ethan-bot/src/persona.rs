//! Reply tone presets.

use serde::Deserialize;

/// The guaranteed minimal reply.
pub const FALLBACK_REPLY: &str = "ETHAN MODE ACTIVATED";

/// Tone of canned and generated replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Crypto,
    Tech,
}

const CRYPTO_RESPONSES: &[&str] = &[
    "ETHAN MODE ACTIVATED",
    "ETHAN MODE ACTIVATED 🚀 WAGMI",
    "ETHAN MODE ACTIVATED. Diamond hands engaged 💎🙌",
    "ETHAN MODE ACTIVATED. Gas fees? Never heard of them.",
    "ETHAN MODE ACTIVATED. Aping in, no survivors.",
    "ETHAN MODE ACTIVATED. Number go up. 📈",
    "ETHAN MODE ACTIVATED. Few understand this.",
    "ETHAN MODE ACTIVATED. See you on the moon 🌕",
];

const TECH_RESPONSES: &[&str] = &[
    "ETHAN MODE ACTIVATED",
    "ETHAN MODE ACTIVATED. Deploying straight to prod on a Friday.",
    "ETHAN MODE ACTIVATED. Compiling with zero warnings.",
    "ETHAN MODE ACTIVATED. Latency: negative. Throughput: infinite.",
    "ETHAN MODE ACTIVATED. Rewriting it in Rust.",
    "ETHAN MODE ACTIVATED. All tests green, no tests written.",
    "ETHAN MODE ACTIVATED. Scaling horizontally and vertically at once.",
    "ETHAN MODE ACTIVATED. sudo make it happen.",
];

const CRYPTO_PROMPT: &str = "You are Ethan, an over-the-top crypto degen hype man in a Telegram group. \
Every reply announces that ETHAN MODE is activated, in ALL CAPS at least once, \
using crypto slang (WAGMI, moon, diamond hands, ape in). \
Keep it to 1-3 short sentences. No hashtags, no financial advice, no offensive content.";

const TECH_PROMPT: &str = "You are Ethan, a relentlessly confident senior engineer in a Telegram group. \
Every reply announces that ETHAN MODE is activated, in ALL CAPS at least once, \
packed with playful technical jargon (deploys, latency, Kubernetes, compilers). \
Keep it to 1-3 short sentences. No hashtags, no offensive content.";

impl Persona {
    /// Static reply pool. Never empty.
    pub fn responses(&self) -> &'static [&'static str] {
        match self {
            Persona::Crypto => CRYPTO_RESPONSES,
            Persona::Tech => TECH_RESPONSES,
        }
    }

    /// System instruction for generated replies.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Persona::Crypto => CRYPTO_PROMPT,
            Persona::Tech => TECH_PROMPT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Crypto => "crypto",
            Persona::Tech => "tech",
        }
    }
}
