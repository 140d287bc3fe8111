//! Literal resume content.
//!
//! Kept as static data so the page model can borrow it without allocation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Includes the trailing colon, rendered bold.
    pub category: &'static str,
    pub items: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employer {
    pub headline: &'static str,
    pub roles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccomplishmentGroup {
    pub role: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub degree: &'static str,
    pub institution: &'static str,
    pub logo_src: &'static str,
    pub logo_alt: &'static str,
}

pub const EXECUTIVE_PROFILE: &str = "Transformational software engineering leader with global experience driving innovation, regulatory compliance, and operational excellence. Known for scaling high-performing teams, modernizing SDLC processes, and delivering embedded, cloud, mobile, web and IoT platforms that generate revenue, cut costs and secure market access. Recognized for revitalizing underperforming organizations, accelerating time-to-market, and ensuring compliance with evolving global regulations.";

pub const SKILL_COLUMNS: u8 = 2;

pub const SKILLS: &[Skill] = &[
    Skill {
        category: "Cloud and IoT:",
        items: "Azure Cloud Services (4yr), Azure IoT Edge (2yr), AWS (2yr)",
    },
    Skill {
        category: "Embedded & OS:",
        items: "Linux (12yr), Yocto (6yr), RTOS (5yr), Windows Embedded (10yr)",
    },
    Skill {
        category: "Programming Languages:",
        items: "C++ (7yr), C (7yr), C# (10yr), JAVA (3yr), Javascript (3yr), Python (3yr)",
    },
    Skill {
        category: "Frameworks and UI:",
        items: "Flutter (3yr), Blazor (3yr), Vue (3yr), React (3yr)",
    },
    Skill {
        category: "Databases & Data Services:",
        items: "SQL (12yr), Cosmos DB (2yr)",
    },
];

pub const EXPERIENCE: &[Employer] = &[
    Employer {
        headline: "Matthews Marking Systems [Marking and Coding Products] – February 2024 to Present",
        roles: &[
            "Sr Director of Software Engineering – July 2025 to Present",
            "Director of Software Engineering – February 2024 to July 2025",
        ],
    },
    Employer {
        headline: "Kohler [Residential Power Products] – August 2021 to February 2024",
        roles: &["Software Development Manager"],
    },
    Employer {
        headline: "GEA Group [Industrial Refrigeration Controls] – April 2012 to August 2021",
        roles: &[
            "Director – Automation Controls and Tools Development – Sept 2019 to Aug 2021",
            "Sr. Software Engineer III - Team Lead – March 2017 to Sept 2019",
            "Software Engineer III – May 2015 to March 2017",
            "Software Engineer II – April 2012 to May 2015",
        ],
    },
    Employer {
        headline: "Mauell [Mission Critical Control] – March 2006 to April 2012",
        roles: &[
            "Lead Design Engineer – July 2010 to April 2012",
            "Electrical Engineer – February 2008 to July 2010",
            "Application Engineer – March 2006 to February 2008",
        ],
    },
];

pub const ACCOMPLISHMENTS: &[AccomplishmentGroup] = &[
    AccomplishmentGroup {
        role: "Sr Director of Software Engineering – Matthews Marking Systems",
        items: &[
            "Scaled engineering throughput 289% YOY by modernizing SDLC tooling, codifying agile standards, and cultivating a high-performing global team.",
            "Architected platforms across three major product families, integrating embedded, cloud and UI development to deliver cohesive, scalable solutions.",
            "Directed division-wide Cyber Resiliency Act (CRA) compliance initiative, conducting comprehensive risk analyses, implementing SBOM pipelines and mitigation plans.",
        ],
    },
    AccomplishmentGroup {
        role: "Director of Software Engineering – Matthews Marking Systems",
        items: &[
            "Turned around a low-performing department, boosting sprint velocity 457% in under 12 months through modernization of CI/CD and automation.",
            "Standardized toolchains and development processes across platform teams, driving consistency in code quality and reducing rework-related costs by 50%.",
        ],
    },
    AccomplishmentGroup {
        role: "Software Development Manager – Kohler",
        items: &[
            "Recruited and scaled a 10+ person high-performing team, delivering multiple apps, websites and a greenfield cloud environment in under one year.",
            "Architected a next-generation IoT edge gateway using containerization and digital twin technology for predictive diagnostics and monitoring.",
            "Modernized the product technology stack, selecting scalable platforms that expanded functionality without increasing headcount.",
            "Re-architected and migrated cloud infrastructure to Azure, cutting cloud operating costs by 40% while improving device reliability.",
        ],
    },
    AccomplishmentGroup {
        role: "Automation Controls and Tools Development Director – GEA Group",
        items: &[
            "Designed and launched a Linux-based embedded controls platform, reducing deployments costs by 50% across deployments.",
            "Delivered greater than 1% EBITDA point in annual divisional savings through Value Analysis / Value Engineering initiatives.",
            "Developed a digital transformation strategy, integrating controls, IoT, and cloud platforms into a unified solution adopted globally.",
        ],
    },
];

pub const EDUCATION: &[Degree] = &[
    Degree {
        degree: "Master of Engineering in Electrical Engineering",
        institution: "Penn State University – May 2017",
        logo_src: "/psulogo.jpg",
        logo_alt: "Penn State Logo",
    },
    Degree {
        degree: "Bachelor of Science in Computer Engineering",
        institution: "Elizabethtown College – May 2005",
        logo_src: "/etownCollegelogo.png",
        logo_alt: "Elizabethtown College Logo",
    },
];

/// Widths (percent) of the skeleton bars shown for sections without content.
pub const SKELETON_WIDTHS: [u8; 3] = [50, 66, 83];
