pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { title: "High Performance", description: "Blazing fast servers with the latest hardware" },
    Feature { title: "99.9% Uptime",     description: "Reliable hosting with minimal downtime" },
    Feature { title: "DDoS Protection",  description: "Advanced protection against DDoS attacks" },
    Feature { title: "Instant Setup",    description: "Get your server up and running in seconds" },
];
