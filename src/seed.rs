use crate::models::job::NewJob;

struct SampleJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    categories: &'static [&'static str],
    description: &'static str,
    employment_type: &'static str,
    featured: bool,
    logo: Option<&'static str>,
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        title: "Senior Frontend Developer",
        company: "Stripe",
        location: "San Francisco, CA",
        categories: &["Engineering"],
        description: "Build polished payment experiences used by millions of businesses. \
                      Deep React and TypeScript experience required.",
        employment_type: "Full Time",
        featured: true,
        logo: Some("https://logo.clearbit.com/stripe.com"),
    },
    SampleJob {
        title: "Backend Engineer",
        company: "Cloudflare",
        location: "Remote",
        categories: &["Engineering"],
        description: "Design and operate high-throughput services at the edge of the network.",
        employment_type: "Full Time",
        featured: false,
        logo: Some("https://logo.clearbit.com/cloudflare.com"),
    },
    SampleJob {
        title: "Brand Designer",
        company: "Dropbox",
        location: "New York, NY",
        categories: &["Design"],
        description: "Shape the visual identity of Dropbox across product, marketing and events.",
        employment_type: "Full Time",
        featured: true,
        logo: Some("https://logo.clearbit.com/dropbox.com"),
    },
    SampleJob {
        title: "Product Designer",
        company: "Figma",
        location: "London, UK",
        categories: &["Design", "Product"],
        description: "Own end-to-end design of collaboration features from research to launch.",
        employment_type: "Full Time",
        featured: false,
        logo: Some("https://logo.clearbit.com/figma.com"),
    },
    SampleJob {
        title: "Growth Marketing Manager",
        company: "Notion",
        location: "Remote",
        categories: &["Marketing"],
        description: "Plan and run acquisition campaigns and lifecycle experiments.",
        employment_type: "Full Time",
        featured: false,
        logo: Some("https://logo.clearbit.com/notion.so"),
    },
    SampleJob {
        title: "Data Analyst",
        company: "Spotify",
        location: "Stockholm, Sweden",
        categories: &["Data", "Analytics"],
        description: "Turn listening data into insight for product and editorial teams.",
        employment_type: "Contract",
        featured: false,
        logo: Some("https://logo.clearbit.com/spotify.com"),
    },
    SampleJob {
        title: "Product Manager",
        company: "Airbnb",
        location: "Seattle, WA",
        categories: &["Product"],
        description: "Lead the roadmap for host tools and work closely with design and engineering.",
        employment_type: "Full Time",
        featured: true,
        logo: Some("https://logo.clearbit.com/airbnb.com"),
    },
    SampleJob {
        title: "Customer Support Specialist",
        company: "Zendesk",
        location: "Dublin, Ireland",
        categories: &["Support"],
        description: "Help customers get the most out of the platform over chat and email.",
        employment_type: "Part Time",
        featured: false,
        logo: None,
    },
];

/// The fixed demo dataset loaded by `POST /api/seed`.
pub fn sample_jobs() -> Vec<NewJob> {
    SAMPLE_JOBS
        .iter()
        .map(|s| NewJob {
            title: s.title.to_string(),
            company: s.company.to_string(),
            location: s.location.to_string(),
            categories: s.categories.iter().map(|c| c.to_string()).collect(),
            description: s.description.to_string(),
            employment_type: s.employment_type.to_string(),
            featured: s.featured,
            logo: s.logo.map(str::to_string),
        })
        .collect()
}
