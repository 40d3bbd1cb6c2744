//! Provider registry.
//!
//! Static, immutable descriptors mapping a model id to its endpoint, auth
//! mode, and request/response body shapes. Entries are templates only:
//! every request build allocates fresh headers and bodies, so the registry
//! is safe to share across concurrent calls.

/// Model id constants for the supported chat providers.
pub mod model_ids {
    pub const GEMINI: &str = "gemini-2.5-flash";
    pub const GROK: &str = "grok-4-latest";
    pub const DEEPSEEK: &str = "deepseek-chat";
    pub const QWEN: &str = "qwen-max";
}

/// How the credential is injected into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Append `key=<credential>` to the endpoint URL (URL-encoded).
    QueryParam,
    /// Set `Authorization: Bearer <credential>`.
    BearerHeader,
    /// Bearer header plus one fixed extra header (e.g. stream disable).
    BearerWithExtraHeader {
        name: &'static str,
        value: &'static str,
    },
}

/// Which body-building strategy applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestShape {
    /// Gemini `generateContent`: messages flattened into `contents/parts`
    /// with no role field. The flattening is lossy by upstream contract.
    GeminiContents,
    /// OpenAI-style `chat/completions` body.
    OpenAiChat {
        /// Model string sent on the wire (may differ from the registry id).
        wire_model: &'static str,
        temperature: f64,
        /// Whether to emit an explicit `"stream": false` field.
        stream_flag: bool,
    },
}

/// Which response-extraction strategy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `candidates[0].content.parts[0].text`
    GeminiCandidates,
    /// `choices[0].message.content`
    OpenAiChoices,
}

/// Static descriptor for one chat provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderEntry {
    pub id: &'static str,
    pub endpoint: &'static str,
    pub auth: AuthMode,
    pub request_shape: RequestShape,
    pub response_shape: ResponseShape,
}

/// All registered chat providers, defined once at compile time.
pub static PROVIDERS: &[ProviderEntry] = &[
    ProviderEntry {
        id: model_ids::GEMINI,
        endpoint:
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
        auth: AuthMode::QueryParam,
        request_shape: RequestShape::GeminiContents,
        response_shape: ResponseShape::GeminiCandidates,
    },
    ProviderEntry {
        id: model_ids::GROK,
        endpoint: "https://api.x.ai/v1/chat/completions",
        auth: AuthMode::BearerHeader,
        request_shape: RequestShape::OpenAiChat {
            wire_model: "grok-4-latest",
            temperature: 0.0,
            stream_flag: true,
        },
        response_shape: ResponseShape::OpenAiChoices,
    },
    ProviderEntry {
        id: model_ids::DEEPSEEK,
        endpoint: "https://api.deepseek.com/v1/chat/completions",
        auth: AuthMode::BearerHeader,
        request_shape: RequestShape::OpenAiChat {
            wire_model: "deepseek-chat",
            temperature: 0.7,
            stream_flag: false,
        },
        response_shape: ResponseShape::OpenAiChoices,
    },
    ProviderEntry {
        id: model_ids::QWEN,
        endpoint: "https://api-inference.modelscope.cn/v1/chat/completions",
        auth: AuthMode::BearerWithExtraHeader {
            name: "X-DashScope-SSE",
            value: "disable",
        },
        request_shape: RequestShape::OpenAiChat {
            wire_model: "Qwen/Qwen3-235B-A22B-Thinking-2507",
            temperature: 0.7,
            stream_flag: true,
        },
        response_shape: ResponseShape::OpenAiChoices,
    },
];

/// Look up a provider entry by model id.
pub fn lookup(model_id: &str) -> Option<&'static ProviderEntry> {
    PROVIDERS.iter().find(|entry| entry.id == model_id)
}

/// Display metadata for UI-layer model pickers.
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
}

/// Supported models in recommendation order.
pub static SUPPORTED_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: model_ids::GEMINI,
        name: "Gemini 2.5 Flash",
        provider: "Google",
        description: "Default recommendation",
    },
    ModelInfo {
        id: model_ids::GROK,
        name: "Grok-4",
        provider: "xAI",
        description: "Relaxed content policy",
    },
    ModelInfo {
        id: model_ids::DEEPSEEK,
        name: "DeepSeek-V3",
        provider: "DeepSeek",
        description: "Cost-effective",
    },
    ModelInfo {
        id: model_ids::QWEN,
        name: "Qwen3-235B-Thinking",
        provider: "Alibaba",
        description: "Chain-of-thought model",
    },
];
