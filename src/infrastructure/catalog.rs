//! The fixed in-memory job catalog. Listings are immutable for the process
//! lifetime; every search starts from this set.

use once_cell::sync::Lazy;

use crate::domain::job::{JobListing, JobType};

static CATALOG: Lazy<Vec<JobListing>> = Lazy::new(build_catalog);

pub fn job_listings() -> Vec<JobListing> {
    CATALOG.clone()
}

/// The location filter options offered by the search form.
pub fn locations() -> Vec<&'static str> {
    vec!["San Francisco, CA", "New York, NY", "Austin, TX", "Remote"]
}

fn build_catalog() -> Vec<JobListing> {
    vec![
        JobListing {
            id: 1,
            title: "Senior Frontend Developer".into(),
            company: "TechGrowth Inc".into(),
            location: "San Francisco, CA".into(),
            salary: "$120K - $150K".into(),
            job_type: JobType::FullTime,
            posted: "2 days ago".into(),
            description: "We're looking for an experienced Frontend Developer with strong React \
                          skills to join our growing team."
                .into(),
            requirements: vec![
                "5+ years of experience in frontend development".into(),
                "Expert knowledge of React, JavaScript, and modern web technologies".into(),
                "Experience with responsive design and CSS frameworks".into(),
                "Understanding of CI/CD pipelines and testing methodologies".into(),
            ],
            company_info: "TechGrowth is a leading software company specializing in building \
                           enterprise SaaS solutions."
                .into(),
            logo: "https://images.unsplash.com/photo-1567095761054-7a02e69e5c43?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&h=100&q=80".into(),
        },
        JobListing {
            id: 2,
            title: "UX/UI Designer".into(),
            company: "Creative Solutions".into(),
            location: "New York, NY".into(),
            salary: "$90K - $120K".into(),
            job_type: JobType::FullTime,
            posted: "1 week ago".into(),
            description: "Join our design team to create beautiful, intuitive interfaces for our \
                          clients across various industries."
                .into(),
            requirements: vec![
                "3+ years of experience in UX/UI design".into(),
                "Proficiency in Figma, Sketch, or similar design tools".into(),
                "Strong portfolio demonstrating user-centered design process".into(),
                "Excellent communication and collaboration skills".into(),
            ],
            company_info: "Creative Solutions is a design agency working with Fortune 500 \
                           companies to create exceptional digital experiences."
                .into(),
            logo: "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&h=100&q=80".into(),
        },
        JobListing {
            id: 3,
            title: "DevOps Engineer".into(),
            company: "CloudScale".into(),
            location: "Remote".into(),
            salary: "$110K - $140K".into(),
            job_type: JobType::Contract,
            posted: "3 days ago".into(),
            description: "Help us build and maintain our cloud infrastructure and CI/CD pipelines \
                          for maximum reliability and performance."
                .into(),
            requirements: vec![
                "Experience with AWS, Docker, and Kubernetes".into(),
                "Knowledge of infrastructure as code using Terraform or CloudFormation".into(),
                "Understanding of monitoring and logging solutions".into(),
                "Experience with automation and CI/CD pipelines".into(),
            ],
            company_info: "CloudScale provides cloud infrastructure solutions for high-growth \
                           startups and enterprises."
                .into(),
            logo: "https://images.unsplash.com/photo-1573164713988-8665fc963095?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&h=100&q=80".into(),
        },
        JobListing {
            id: 4,
            title: "Product Manager".into(),
            company: "InnovateTech".into(),
            location: "Austin, TX".into(),
            salary: "$130K - $160K".into(),
            job_type: JobType::FullTime,
            posted: "5 days ago".into(),
            description: "Lead product development from conception to launch, working with \
                          cross-functional teams to deliver exceptional user experiences."
                .into(),
            requirements: vec![
                "5+ years of product management experience".into(),
                "Strong analytical skills and data-driven approach".into(),
                "Experience with agile methodologies and product lifecycle".into(),
                "Excellent communication and stakeholder management skills".into(),
            ],
            company_info: "InnovateTech builds cutting-edge software products that transform how \
                           businesses operate."
                .into(),
            logo: "https://images.unsplash.com/photo-1551818255-e6e10975bc17?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&h=100&q=80".into(),
        },
    ]
}
