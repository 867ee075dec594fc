//! Built-in Dataset
//!
//! The fixed, ordered deck of platform profiles. Compiled in; there is no
//! external load path.

use crate::models::Profile;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The full deck, in presentation order.
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "vercel".to_string(),
            name: "Vercel".to_string(),
            tagline: "Deploy. Preview. Ship.".to_string(),
            description: "The platform for frontend developers, providing the speed and \
                          reliability innovators need to create at the moment of inspiration."
                .to_string(),
            pros: strings(&[
                "Lightning-fast deployments",
                "Automatic HTTPS & CDN",
                "Git integration",
                "Zero configuration",
            ]),
            cons: strings(&[
                "Can get expensive at scale",
                "Limited backend functionality",
                "Vendor lock-in concerns",
            ]),
            logo: "▲".to_string(),
            logo_url: Some("/vercel-black.svg".to_string()),
            category: "Deployment Platform".to_string(),
        },
        Profile {
            id: "railway".to_string(),
            name: "Railway".to_string(),
            tagline: "Made for any language, for projects big and small".to_string(),
            description: "Railway is a deployment platform where you can provision \
                          infrastructure, develop with that infrastructure locally, and then \
                          deploy to the cloud."
                .to_string(),
            pros: strings(&[
                "Full-stack deployments",
                "Database provisioning",
                "Simple pricing",
                "Great developer experience",
            ]),
            cons: strings(&["Newer platform", "Limited regions", "Fewer integrations"]),
            logo: "🚂".to_string(),
            logo_url: Some("https://railway.app/brand/logo-light.png".to_string()),
            category: "Cloud Platform".to_string(),
        },
        Profile {
            id: "docker-stack".to_string(),
            name: "Docker Stack".to_string(),
            tagline: "Native orchestration for Docker containers".to_string(),
            description: "Docker Stack provides native clustering and orchestration \
                          capabilities built into Docker. Deploy and manage multi-container \
                          applications across a cluster of Docker nodes."
                .to_string(),
            pros: strings(&[
                "Native Docker integration",
                "Built-in load balancing",
                "Service discovery",
                "Rolling updates",
                "Secrets management",
            ]),
            cons: strings(&[
                "Limited compared to Kubernetes",
                "Requires Docker Swarm mode",
                "No review apps",
                "Less flexible networking",
            ]),
            logo: "🐳".to_string(),
            logo_url: Some("/docker-logo.svg".to_string()),
            category: "Container Orchestration".to_string(),
        },
        Profile {
            id: "coolify".to_string(),
            name: "Coolify".to_string(),
            tagline: "Self-hostable Heroku & Netlify alternative".to_string(),
            description: "An open-source & self-hostable Heroku / Netlify / Vercel \
                          alternative for your own VPS."
                .to_string(),
            pros: strings(&[
                "Self-hosted control",
                "Open source",
                "Cost effective",
                "No vendor lock-in",
            ]),
            cons: strings(&[
                "Requires server management",
                "Smaller community",
                "More setup complexity",
            ]),
            logo: "❄️".to_string(),
            logo_url: Some("/coolify.png".to_string()),
            category: "Self-Hosted Platform".to_string(),
        },
        Profile {
            id: "dokku".to_string(),
            name: "Dokku".to_string(),
            tagline: "A docker-powered PaaS that helps you build and manage the lifecycle \
                      of applications"
                .to_string(),
            description: "The smallest PaaS implementation you've ever seen. Deploy your \
                          apps with a git push."
                .to_string(),
            pros: strings(&[
                "Lightweight & fast",
                "Heroku-like workflow",
                "Docker-based",
                "Highly customizable",
            ]),
            cons: strings(&[
                "Command-line heavy",
                "Requires Linux knowledge",
                "Limited GUI",
                "Single server limitation",
            ]),
            logo: "🐋".to_string(),
            logo_url: Some("/dokku.svg".to_string()),
            category: "Mini-PaaS".to_string(),
        },
        Profile {
            id: "dokploy".to_string(),
            name: "Dokploy".to_string(),
            tagline: "Effortless deployment and management".to_string(),
            description: "Deploy and manage your applications with ease. Dokploy simplifies \
                          the deployment process with intuitive tools and powerful automation."
                .to_string(),
            pros: strings(&[
                "User-friendly interface",
                "Automated deployments",
                "Easy scaling",
                "Built-in monitoring",
                "Review apps support",
            ]),
            cons: strings(&[
                "Newer in the market",
                "Limited documentation",
                "Smaller community",
            ]),
            logo: "🚀".to_string(),
            logo_url: Some("/dokploy.svg".to_string()),
            category: "Deployment Platform".to_string(),
        },
        Profile {
            id: "systemd".to_string(),
            name: "SystemD".to_string(),
            tagline: "Linux service management and initialization".to_string(),
            description: "SystemD is a system and service manager for Linux operating \
                          systems. It provides a standard process for controlling programs \
                          that run when a Linux system boots up."
                .to_string(),
            pros: strings(&[
                "Native Linux integration",
                "Fast parallel startup",
                "Service dependency management",
                "Robust logging with journald",
                "Socket activation",
            ]),
            cons: strings(&[
                "Linux-only solution",
                "Complex configuration",
                "Steep learning curve",
                "Limited GUI tools",
            ]),
            logo: "🐧".to_string(),
            logo_url: None,
            category: "System Manager".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn profile_ids_are_unique() {
        let profiles = builtin_profiles();
        let ids: HashSet<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), profiles.len());
    }

    #[test]
    fn every_profile_has_pros_and_cons() {
        for profile in builtin_profiles() {
            assert!(!profile.pros.is_empty(), "{} has no pros", profile.id);
            assert!(!profile.cons.is_empty(), "{} has no cons", profile.id);
            assert!(!profile.logo.is_empty(), "{} has no glyph", profile.id);
        }
    }
}
