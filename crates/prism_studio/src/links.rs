//! External image generators that accept the produced prompts.

/// Pricing tier of an image generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum GeneratorTier {
    /// Usable without payment
    Free,
    /// Requires a subscription or credits
    Premium,
}

/// An image generation site the user can paste a prompt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeneratorLink {
    /// Site name
    pub name: &'static str,
    /// Landing page
    pub url: &'static str,
    /// Pricing tier
    pub tier: GeneratorTier,
}

/// Recommended generators, free ones first.
pub const IMAGE_GENERATORS: &[ImageGeneratorLink] = &[
    ImageGeneratorLink {
        name: "Pollinations AI",
        url: "https://pollinations.ai/",
        tier: GeneratorTier::Free,
    },
    ImageGeneratorLink {
        name: "Craiyon",
        url: "https://www.craiyon.com/",
        tier: GeneratorTier::Free,
    },
    ImageGeneratorLink {
        name: "Leonardo AI",
        url: "https://leonardo.ai/",
        tier: GeneratorTier::Free,
    },
    ImageGeneratorLink {
        name: "DALL-E 3",
        url: "https://openai.com/dall-e-3",
        tier: GeneratorTier::Premium,
    },
    ImageGeneratorLink {
        name: "Midjourney",
        url: "https://www.midjourney.com/",
        tier: GeneratorTier::Premium,
    },
    ImageGeneratorLink {
        name: "Stable Diffusion",
        url: "https://stability.ai/",
        tier: GeneratorTier::Premium,
    },
];

/// Generators in one tier.
pub fn image_generators(tier: GeneratorTier) -> impl Iterator<Item = &'static ImageGeneratorLink> {
    IMAGE_GENERATORS.iter().filter(move |g| g.tier == tier)
}
