use super::{
    About, Announcement, Blog, BlogPost, Certification, ContactInfo, Profile, Project, Service,
    Skill, Social, TechCategory, TechItem,
};

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alyssa Jecomo".to_string(),
            greeting: "Hello There!".to_string(),
            headline_prefix: "I am Web".to_string(),
            tagline: "Passionate about crafting exceptional digital experiences that captivate \
                      audiences, enhance engagement, and drive success through innovative design \
                      and seamless functionality."
                .to_string(),
            words: vec![" Developer".to_string(), " Designer".to_string()],
        }
    }
}

impl Default for About {
    fn default() -> Self {
        let skill = |name: &str, percent| Skill {
            name: name.to_string(),
            percent,
        };
        Self {
            journey: "My web development journey began in 2016 when, driven by passion and \
                      curiosity, I started exploring website development with the dream of \
                      becoming a skilled developer. Through experimentation and hands-on \
                      learning, I discovered a deep appreciation for building websites and \
                      software, which allowed me to develop a strong foundation in the field. \
                      In 2024, after transitioning from an office job, I took the leap into \
                      freelancing to pursue my dream career. I am thrilled to have embarked on \
                      this path and remain committed to delivering high-quality solutions while \
                      serving my clients with dedication."
                .to_string(),
            skills: vec![
                skill("Frontend Development", 70),
                skill("Backend Development", 50),
                skill("Database Management", 50),
                skill("Website Security Practices", 50),
                skill("Version Control & Deployment", 70),
                skill("Problem-solving & Debugging", 60),
                skill("Project Management", 30),
                skill("Performance Optimization", 30),
            ],
            resume_url: "/assets/resume/AlyssaJecomo_CV.pdf".to_string(),
        }
    }
}

impl Default for Blog {
    fn default() -> Self {
        let post = |title: &str, excerpt: &str, date: &str, read_time: &str, category: &str, slug: &str| BlogPost {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            category: category.to_string(),
            url: format!("https://technologywebdev15.substack.com/p/{slug}"),
        };
        Self {
            posts: vec![
                post(
                    "Inside This Blog: What You'll Discover",
                    "A overview into the insights, tips, and inspiring stories waiting for you!",
                    "March 30, 2025",
                    "3 min read",
                    "Introduction",
                    "inside-this-blog-what-youll-discover",
                ),
                post(
                    "My Journey into Website Development: How It All Began",
                    "Humble Beginnings: Powered by Passion, Driven by Patience",
                    "April 02, 2025",
                    "10 min read",
                    "Career",
                    "my-journey-into-website-development",
                ),
                post(
                    "Pursuing Proficiency in Web Development: Capabilities with Modern Tools (WordPress, Webflow)",
                    "Learning to Use Website Builders and Their Plugins as Tools for Website Development",
                    "April 13, 2025",
                    "8 min read",
                    "Website Builders",
                    "pursuing-proficiency-in-web-development",
                ),
            ],
            all_posts_url: "https://technologywebdev15.substack.com/".to_string(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "guoalyssalyn201510@gmail.com".to_string(),
            phone: "63+ 928-721-4334".to_string(),
            location: "San Pedro City, Laguna, Calabarzon, Philippines".to_string(),
        }
    }
}

pub(super) fn certifications() -> Vec<Certification> {
    [
        (
            "Google Map API",
            "San Pedro College of Business Administration",
            "September 2019",
        ),
        (
            "Building Cross-Platform Mobile Apps using Xamarin.Forms",
            "San Pedro College of Business Administration",
            "September 2019",
        ),
        ("Data Visualization Workshop", "Zuitt", "October 2024"),
        ("Javascript Game Development Workshop", "Zuitt", "February 2025"),
        (
            "Frontend Fundamentals Bootcamp",
            "One Code Camp Academy",
            "October 2024",
        ),
        ("Understanding Data Topics", "DataCamp", "February 2025"),
    ]
    .into_iter()
    .map(|(title, issuer, date)| Certification {
        title: title.to_string(),
        issuer: issuer.to_string(),
        date: date.to_string(),
    })
    .collect()
}

pub(super) fn tech_stack() -> Vec<TechItem> {
    use TechCategory::{Backend, DesignTools, Frontend, OtherTools};
    [
        (1, "React", Frontend),
        (2, "TypeScript", Frontend),
        (3, "JavaScript", Frontend),
        (5, "Next.js", Frontend),
        (6, "Tailwind", Frontend),
        (10, "Bootstrap", Frontend),
        (4, "Node.js", Backend),
        (7, "Python", Backend),
        (8, "MySQL", Backend),
        (9, "PostgreSQL", Backend),
        (15, "Dash", Backend),
        (13, "Lunacy", DesignTools),
        (14, "Figma", DesignTools),
        (11, "Git", OtherTools),
        (12, "VS Code", OtherTools),
        (16, "Android Studio", OtherTools),
    ]
    .into_iter()
    .map(|(id, name, category)| TechItem {
        id,
        name: name.to_string(),
        category,
    })
    .collect()
}

pub(super) fn services() -> Vec<Service> {
    [
        (
            "Frontend Development",
            "Designing and developing dynamic, responsive user interfaces with modern frameworks \
             to enhance user experience and performance.",
        ),
        (
            "Website Branding",
            "Crafting visually cohesive and captivating brand identities for websites, ensuring \
             consistency in logos, color palettes, typography, and design elements to enhance \
             brand recognition and user experience.",
        ),
        (
            "UI/UX Design",
            "Designing intuitive and visually engaging interfaces using modern design principles \
             to enhance user experience and accessibility.",
        ),
        (
            "Website Maintenance & Support",
            "Providing ongoing technical support, updates, and performance optimizations to \
             ensure website security, functionality, and reliability.",
        ),
        (
            "Backend Development",
            "Building secure, scalable, and efficient server-side solutions to ensure seamless \
             functionality and data management for web applications.",
        ),
        (
            "Search Engine Optimization (SEO)",
            "Enhancing website visibility and performance through strategic SEO practices, \
             keyword optimization, and analytics-driven insights.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| Service {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Clinic Management System".to_string(),
            description: "A modern e-commerce platform built with React, Node.js, and MongoDB. \
                          Features include real-time inventory, payment processing, and admin \
                          dashboard."
                .to_string(),
            tags: ["Python", "Dash", "MySQL"].map(String::from).to_vec(),
            github_url: "https://github.com/Guo-Alyssa-Lyn/clinic_management_system".to_string(),
        },
        Project {
            title: "POS-Inventory-Billing System".to_string(),
            description: "A collaborative task management application with real-time updates, \
                          team chat, and project analytics."
                .to_string(),
            tags: [
                "React",
                "Typescript",
                "TailwindCSS",
                "NodeJS",
                "PostgreSQL",
                "Prisma",
                "Neon",
            ]
            .map(String::from)
            .to_vec(),
            github_url: "https://github.com/Guo-Alyssa-Lyn/Typescript-POS-Project".to_string(),
        },
    ]
}

pub(super) fn announcements() -> Vec<Announcement> {
    [
        (
            "Just Released: Blog Posts Are Available Now!",
            "The latest blog posts are now available! Stay updated with fresh insights and new \
             content.",
        ),
        (
            "Seeking Exciting New Projects",
            "Passionate web developer available for new opportunities. Let's collaborate to \
             build innovative and high-quality digital solutions!",
        ),
        (
            "Our Newsletter Has Launched!",
            "Stay updated with the latest web development insights, tips, and trends delivered \
             straight to your inbox. Subscribe now and never miss an update!",
        ),
        (
            "Revamped Portfolio: A Sleek and Modern Experience",
            "The portfolio has a fresh new look with a cleaner layout and smoother navigation.",
        ),
    ]
    .into_iter()
    .map(|(title, body)| Announcement {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

pub(super) fn socials() -> Vec<Social> {
    [
        ("GitHub", "https://github.com/Guo-Alyssa-Lyn"),
        (
            "LinkedIn",
            "https://www.linkedin.com/in/alyssa-lyn-jecomo-9186a82aa/",
        ),
        ("Facebook", "https://www.facebook.com/nyleve.guo/"),
    ]
    .into_iter()
    .map(|(label, url)| Social {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}
