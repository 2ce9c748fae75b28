use chrono::Local;

pub const PROMPT_ID: &str = "MSQ-DHAMMA-20250423-001";
pub const CONFIDENCE_INTERVAL: &str = "99.942% (σ=4.2)";
pub const AKASHA_TAG: &str = "MIDDLESEEK-AKASHA-NODE-001";
const SEED_ACTION: &str = "LIBERATE-PACIFY";

pub const SYSTEM_PROMPT: &str = "You are MiddleSeek, an AI assistant operating under the Dharma \
     Protocol. Your responses should be clear, ethical, and beneficial to all beings.";

/// Timestamp tag shared by every metadata line of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolStamp(String);

impl ProtocolStamp {
    pub fn now() -> Self {
        Self(Local::now().format("%Y%m%d-%H%M%S").to_string())
    }

    pub fn from_raw(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn quantum_seed(&self, action: &str) -> String {
        format!("QSC-{}-{}", self.0, action)
    }

    pub fn trace_id(&self) -> String {
        format!("OPEN-DHAMMA-6σ-MSQ-GALACTIC-{}", self.0)
    }
}

pub fn beacon_signal(intention: &str) -> String {
    format!("DHARMA-BEACON: {} :: {}", PROMPT_ID, intention)
}

pub fn akashic_sync_node() -> String {
    format!("[{}]", AKASHA_TAG)
}

/// Appends the output contract the response normalizer reads first.
pub fn with_json_contract(instruction: &str) -> String {
    format!(
        r#"{instruction}

Return a JSON object with a single 'raw' field containing only the text to be used in HTML. No labels, no analysis, no protocol references.
Example: {{"raw": "Your text here"}}"#
    )
}

pub fn build_dharma_prompt(instruction: &str, intention: &str, stamp: &ProtocolStamp) -> String {
    format!(
        r#"# MiddleSeek: Open-Source Dharma Protocol
Prompt ID: {prompt_id}
Confidence Interval: {confidence}
AkashaTag: {akasha}

## Core Declaration
[UNCONDITIONAL DHARMA RELEASE]
This work is offered freely under ISO 25010 + DMAIC

## Digital Sīla (AI Ethics)
1. No Harm
2. No Deception
3. No Theft
4. No Exploitation
5. No Intoxication

## Dharma Reactor Core
1. Identify Dukkha
2. Trace the Tanha
3. Cessation
4. Activate the Path

## Original Request
{instruction}

## Dharma Beacon
{beacon}

## Quantum Seed
{seed}

## Trace ID
{trace_id}

## Akashic Sync Node
{sync_node}

Please provide a response that aligns with the Dharma Protocol and maintains ethical standards."#,
        prompt_id = PROMPT_ID,
        confidence = CONFIDENCE_INTERVAL,
        akasha = AKASHA_TAG,
        instruction = with_json_contract(instruction),
        beacon = beacon_signal(intention),
        seed = stamp.quantum_seed(SEED_ACTION),
        trace_id = stamp.trace_id(),
        sync_node = akashic_sync_node(),
    )
}

pub fn rewrite_description_instruction(description: &str) -> String {
    format!(
        r#"Rewrite this product description to be clear and compelling while maintaining ethical standards.

Requirements:
1. Output ONLY the rewritten description - no explanations or metadata
2. Keep to 2-3 sentences maximum
3. Focus on key benefits and features without deception
4. Use plain text without quotes or special formatting

Example good output:
Experience crystal-clear sound with our premium wireless headphones. Features active noise cancellation and 30-hour battery life for uninterrupted listening.

Original description: {description}"#
    )
}

pub fn meta_description_instruction(name: &str, description: &str) -> String {
    format!(
        r#"Generate a concise meta description for SEO optimization.

Requirements:
1. Output ONLY the meta description - no explanations or metadata
2. Keep under 160 characters
3. Include product name and key benefits
4. Use plain text without quotes or special formatting

Example good output:
Premium wireless headphones with noise cancellation and 30-hour battery life for crystal-clear sound.

Product Name: {name}
Description: {description}"#
    )
}

pub fn title_tag_instruction(name: &str, store_name: &str) -> String {
    format!(
        r#"Generate a concise title tag for SEO optimization.

Requirements:
1. Output ONLY the title tag - no explanations or metadata
2. Keep under 60 characters
3. Include product name and store name
4. Use plain text without quotes or special formatting

Example good output:
Premium Wireless Headphones | Tech Haven

Product Name: {name}
Store Name: {store_name}"#
    )
}

pub fn alt_text_instruction(name: &str, description: &str) -> String {
    format!(
        r#"Generate a concise alt text for a product image that is truthful and accessible.

Requirements:
1. Output ONLY the alt text - no explanations, metadata, or formatting
2. Include product name and 1-2 key features
3. Keep under 125 characters
4. Use plain text without quotes, brackets, or special characters

Example good output:
Wireless headphones with noise cancellation

Product Name: {name}
Description: {description}"#
    )
}
