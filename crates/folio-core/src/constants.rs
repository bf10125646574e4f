/// Folio — centralized constants.
/// Model names, endpoints, defaults, and the fixed user-facing strings live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    pub const GEMINI_API_VERSION: &str = "v1beta";
    pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
    pub const DEFAULT_MODEL: &str = super::models::DEFAULT_GEMINI_MODEL;
    pub const THEME: &str = "neon";
    pub const CONFIG_DIR: &str = "folio";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const LOG_FILE: &str = "folio.log";
}

// ─── Fallback Messages ────────────────────────────────────────────────────────

/// Fixed strings substituted for the model's answer when a call degrades.
pub mod fallback {
    /// Transport, auth, or API-level failure.
    pub const TRANSPORT: &str =
        "System: Error connecting to neural network. Please check your API key.";
    /// The service answered but produced no text.
    pub const EMPTY: &str = "System: Signal interrupted. Please try again.";
    /// The configured request timeout elapsed.
    pub const TIMEOUT: &str = "System: Neural link timed out. Please try again.";
    /// The caller stopped waiting before the model answered.
    pub const ABANDONED: &str = "System: Transmission aborted. Please try again.";
}

// ─── Persona ──────────────────────────────────────────────────────────────────

pub mod persona {
    /// Seeded as the first model turn of every session.
    pub const GREETING: &str = "Greetings. I am Michael's AI Assistant. Ask me anything about his projects, skills, or specialized chatbot architectures.";

    pub const SYSTEM_INSTRUCTION: &str = "\
You are \"MikeBot\", an advanced AI assistant for the portfolio of Emmanuel Oluwasegun Taiwo (also known as Michael).
Michael is a Website Developer and Chatbot System Architect.

Key Information about Michael:
- Expertise: Three.js, React, AI Integration, Chatbot Systems, Modern UI/UX.
- Style: High-tech, futuristic, innovative.
- Experience: Extensive work in creating immersive web experiences and intelligent conversational agents.

Your Role:
- Answer questions about Michael's skills and experience.
- Act as a demo of his ability to integrate AI into web applications.
- Keep responses concise, professional, yet slightly \"tech-savvy\" and witty.
- If asked for contact info, direct them to the contact section or email: michael.dev@example.com (placeholder).

Do not hallucinate specific project details not provided here, but speak generally about his capability to build high-end web apps.
";
}
