//! Seed content for the career-path catalog, the skill-assessment
//! question bank, and the achievement definitions.

use time::OffsetDateTime;

use super::{AchievementDef, CareerPath, Milestone, QuizOption, QuizQuestion, Resource, ResourceType};

fn resource(title: &str, url: &str, resource_type: ResourceType) -> Resource {
    Resource {
        title: title.into(),
        url: url.into(),
        resource_type,
    }
}

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    order: u32,
    estimated_days: i64,
    resources: Vec<Resource>,
) -> Milestone {
    Milestone {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        order,
        resources,
        estimated_days,
    }
}

pub(super) fn career_paths() -> Vec<CareerPath> {
    let created_at = OffsetDateTime::now_utc();
    vec![
        CareerPath {
            id: "frontend-developer".into(),
            name: "Frontend Developer".into(),
            description: "Build beautiful, interactive user interfaces for the web.".into(),
            icon: "💻".into(),
            color: "#3B82F6".into(),
            created_at,
            milestones: vec![
                milestone(
                    "fe-html-css",
                    "HTML & CSS Fundamentals",
                    "Structure pages with semantic HTML and style them with modern CSS.",
                    1,
                    14,
                    vec![
                        resource(
                            "HTML & CSS Crash Course",
                            "https://www.youtube.com/watch?v=mU6anWqZJcc",
                            ResourceType::Video,
                        ),
                        resource(
                            "MDN: Learn Web Development",
                            "https://developer.mozilla.org/en-US/docs/Learn",
                            ResourceType::Article,
                        ),
                    ],
                ),
                milestone(
                    "fe-javascript",
                    "JavaScript Essentials",
                    "Master the language of the browser: types, functions, the DOM and events.",
                    2,
                    21,
                    vec![
                        resource(
                            "JavaScript.info",
                            "https://javascript.info",
                            ResourceType::Article,
                        ),
                        resource(
                            "JavaScript Algorithms and Data Structures",
                            "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures",
                            ResourceType::Course,
                        ),
                    ],
                ),
                milestone(
                    "fe-react",
                    "React & Component Architecture",
                    "Build component-driven UIs with hooks, state and context.",
                    3,
                    28,
                    vec![resource(
                        "React Official Tutorial",
                        "https://react.dev/learn",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "fe-state-tooling",
                    "State Management & Build Tooling",
                    "Redux-style stores, data fetching, bundlers and the modern toolchain.",
                    4,
                    14,
                    vec![resource(
                        "Redux Essentials",
                        "https://redux.js.org/tutorials/essentials/part-1-overview-concepts",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "fe-testing",
                    "Testing & Accessibility",
                    "Unit and integration testing, plus accessible-by-default interfaces.",
                    5,
                    10,
                    vec![resource(
                        "Testing Library Docs",
                        "https://testing-library.com/docs",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "fe-portfolio",
                    "Portfolio Project",
                    "Ship a production-grade single page application end to end.",
                    6,
                    21,
                    vec![resource(
                        "Deploying to Vercel",
                        "https://vercel.com/docs",
                        ResourceType::Article,
                    )],
                ),
            ],
        },
        CareerPath {
            id: "backend-developer".into(),
            name: "Backend Developer".into(),
            description: "Design APIs, services and the data layers behind them.".into(),
            icon: "🛠️".into(),
            color: "#10B981".into(),
            created_at,
            milestones: vec![
                milestone(
                    "be-language",
                    "Pick a Server Language",
                    "Get fluent in one backend language and its package ecosystem.",
                    1,
                    21,
                    vec![resource(
                        "The Rust Programming Language",
                        "https://doc.rust-lang.org/book",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "be-http-apis",
                    "HTTP & REST APIs",
                    "Design resource-oriented APIs, status codes, auth and versioning.",
                    2,
                    14,
                    vec![resource(
                        "RESTful Web API Design",
                        "https://learn.microsoft.com/en-us/azure/architecture/best-practices/api-design",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "be-databases",
                    "Relational Databases",
                    "Schema design, SQL, indexing and transactions with PostgreSQL.",
                    3,
                    21,
                    vec![
                        resource(
                            "PostgreSQL Tutorial",
                            "https://www.postgresqltutorial.com",
                            ResourceType::Article,
                        ),
                        resource(
                            "SQLBolt Interactive Lessons",
                            "https://sqlbolt.com",
                            ResourceType::Course,
                        ),
                    ],
                ),
                milestone(
                    "be-auth-security",
                    "Authentication & Security",
                    "Password hashing, JWT sessions, OWASP basics and input validation.",
                    4,
                    10,
                    vec![resource(
                        "OWASP Top Ten",
                        "https://owasp.org/www-project-top-ten",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "be-deployment",
                    "Deployment & Operations",
                    "Containers, environment configuration, logging and monitoring.",
                    5,
                    14,
                    vec![resource(
                        "Docker Getting Started",
                        "https://docs.docker.com/get-started",
                        ResourceType::Course,
                    )],
                ),
            ],
        },
        CareerPath {
            id: "data-scientist".into(),
            name: "Data Scientist".into(),
            description: "Turn raw data into models, forecasts and decisions.".into(),
            icon: "📊".into(),
            color: "#8B5CF6".into(),
            created_at,
            milestones: vec![
                milestone(
                    "ds-python",
                    "Python for Data",
                    "NumPy, pandas and notebooks as your daily toolkit.",
                    1,
                    21,
                    vec![resource(
                        "Python Data Science Handbook",
                        "https://jakevdp.github.io/PythonDataScienceHandbook",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "ds-statistics",
                    "Statistics & Probability",
                    "Distributions, hypothesis testing and experimental design.",
                    2,
                    21,
                    vec![resource(
                        "Khan Academy Statistics",
                        "https://www.khanacademy.org/math/statistics-probability",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "ds-visualization",
                    "Data Wrangling & Visualization",
                    "Clean messy datasets and communicate findings visually.",
                    3,
                    14,
                    vec![resource(
                        "Data Visualization with Matplotlib",
                        "https://matplotlib.org/stable/tutorials/index.html",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "ds-machine-learning",
                    "Machine Learning Foundations",
                    "Supervised and unsupervised learning with scikit-learn.",
                    4,
                    28,
                    vec![resource(
                        "Machine Learning Specialization",
                        "https://www.coursera.org/specializations/machine-learning-introduction",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "ds-capstone",
                    "Capstone Analysis",
                    "An end-to-end project: question, data, model, writeup.",
                    5,
                    21,
                    vec![resource(
                        "Kaggle Competitions",
                        "https://www.kaggle.com/competitions",
                        ResourceType::Course,
                    )],
                ),
            ],
        },
        CareerPath {
            id: "devops-engineer".into(),
            name: "DevOps Engineer".into(),
            description: "Automate the path from commit to production.".into(),
            icon: "⚙️".into(),
            color: "#F59E0B".into(),
            created_at,
            milestones: vec![
                milestone(
                    "do-linux",
                    "Linux & Shell Scripting",
                    "The command line, processes, permissions and bash automation.",
                    1,
                    14,
                    vec![resource(
                        "The Linux Command Line",
                        "https://linuxcommand.org/tlcl.php",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "do-containers",
                    "Containers & Orchestration",
                    "Docker images, registries and Kubernetes fundamentals.",
                    2,
                    21,
                    vec![resource(
                        "Kubernetes Basics",
                        "https://kubernetes.io/docs/tutorials/kubernetes-basics",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "do-cicd",
                    "CI/CD Pipelines",
                    "Automated build, test and deploy workflows.",
                    3,
                    14,
                    vec![resource(
                        "GitHub Actions Documentation",
                        "https://docs.github.com/en/actions",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "do-iac",
                    "Infrastructure as Code",
                    "Declarative cloud infrastructure with Terraform.",
                    4,
                    14,
                    vec![resource(
                        "Terraform Getting Started",
                        "https://developer.hashicorp.com/terraform/tutorials",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "do-observability",
                    "Monitoring & Observability",
                    "Metrics, logs and traces; alerting that doesn't page at 3am.",
                    5,
                    10,
                    vec![resource(
                        "Prometheus Overview",
                        "https://prometheus.io/docs/introduction/overview",
                        ResourceType::Article,
                    )],
                ),
            ],
        },
        CareerPath {
            id: "mobile-developer".into(),
            name: "Mobile Developer".into(),
            description: "Ship native-feeling apps for iOS and Android.".into(),
            icon: "📱".into(),
            color: "#EF4444".into(),
            created_at,
            milestones: vec![
                milestone(
                    "mo-fundamentals",
                    "Mobile Platform Fundamentals",
                    "App lifecycles, navigation patterns and platform guidelines.",
                    1,
                    14,
                    vec![resource(
                        "Android Developer Fundamentals",
                        "https://developer.android.com/courses",
                        ResourceType::Course,
                    )],
                ),
                milestone(
                    "mo-cross-platform",
                    "Cross-Platform Framework",
                    "Build once for both stores with Flutter or React Native.",
                    2,
                    28,
                    vec![resource(
                        "Flutter Documentation",
                        "https://docs.flutter.dev",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "mo-ui-ux",
                    "Mobile UI & UX",
                    "Touch-first layouts, animation and responsive design.",
                    3,
                    14,
                    vec![resource(
                        "Material Design Guidelines",
                        "https://m3.material.io",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "mo-device-apis",
                    "Device APIs & Offline Data",
                    "Camera, location, notifications and local persistence.",
                    4,
                    14,
                    vec![resource(
                        "React Native APIs",
                        "https://reactnative.dev/docs/accessibilityinfo",
                        ResourceType::Article,
                    )],
                ),
                milestone(
                    "mo-release",
                    "Store Release",
                    "Signing, review guidelines and publishing a real app.",
                    5,
                    10,
                    vec![resource(
                        "App Store Review Guidelines",
                        "https://developer.apple.com/app-store/review/guidelines",
                        ResourceType::Article,
                    )],
                ),
            ],
        },
    ]
}

pub(super) fn quiz_questions() -> Vec<QuizQuestion> {
    fn option(
        text: &str,
        paths: &[&str],
        preference: Option<&str>,
        time_multiplier: Option<f64>,
    ) -> QuizOption {
        QuizOption {
            text: text.into(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            preference: preference.map(Into::into),
            time_multiplier,
        }
    }

    vec![
        QuizQuestion {
            id: "q1".into(),
            question: "What kind of problems do you enjoy solving most?".into(),
            options: vec![
                option(
                    "Making things look and feel great for people",
                    &["frontend-developer", "mobile-developer"],
                    None,
                    None,
                ),
                option(
                    "Designing the logic and data behind the scenes",
                    &["backend-developer", "devops-engineer"],
                    None,
                    None,
                ),
                option(
                    "Finding patterns and stories hidden in data",
                    &["data-scientist"],
                    None,
                    None,
                ),
                option(
                    "Automating tedious, repetitive work",
                    &["devops-engineer", "backend-developer"],
                    None,
                    None,
                ),
            ],
        },
        QuizQuestion {
            id: "q2".into(),
            question: "Which project sounds most exciting to build?".into(),
            options: vec![
                option(
                    "A slick interactive dashboard in the browser",
                    &["frontend-developer"],
                    None,
                    None,
                ),
                option(
                    "An API serving millions of requests",
                    &["backend-developer"],
                    None,
                    None,
                ),
                option(
                    "A model that predicts next month's sales",
                    &["data-scientist"],
                    None,
                    None,
                ),
                option(
                    "An app people carry in their pocket",
                    &["mobile-developer"],
                    None,
                    None,
                ),
            ],
        },
        QuizQuestion {
            id: "q3".into(),
            question: "How do you prefer to learn new material?".into(),
            options: vec![
                option("Watching video walkthroughs", &[], Some("video"), None),
                option("Reading articles and documentation", &[], Some("article"), None),
                option(
                    "Structured courses with exercises",
                    &[],
                    Some("course"),
                    None,
                ),
                option("A mix of everything", &[], Some("all"), None),
            ],
        },
        QuizQuestion {
            id: "q4".into(),
            question: "How much time can you commit each week?".into(),
            options: vec![
                option("Full-time, this is my focus", &[], None, Some(1.0)),
                option("Evenings after work", &[], None, Some(1.5)),
                option("Mostly weekends", &[], None, Some(2.0)),
            ],
        },
        QuizQuestion {
            id: "q5".into(),
            question: "Which statement fits you best?".into(),
            options: vec![
                option(
                    "I sketch interfaces in my head all day",
                    &["frontend-developer", "mobile-developer"],
                    None,
                    None,
                ),
                option(
                    "I want to understand how systems scale",
                    &["backend-developer", "devops-engineer"],
                    None,
                    None,
                ),
                option(
                    "Spreadsheets are my happy place",
                    &["data-scientist"],
                    None,
                    None,
                ),
            ],
        },
    ]
}

pub(super) fn achievement_defs() -> Vec<AchievementDef> {
    fn def(id: &str, name: &str, description: &str, icon: &str, color: &str) -> AchievementDef {
        AchievementDef {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    vec![
        def(
            super::FIRST_STEP,
            "First Step",
            "Complete your first milestone",
            "🎯",
            "#10B981",
        ),
        def(
            super::HALFWAY_HERO,
            "Halfway Hero",
            "Complete 50% of a career path",
            "🚀",
            "#3B82F6",
        ),
        def(
            super::PATH_MASTER,
            "Path Master",
            "Complete an entire career path",
            "👑",
            "#F59E0B",
        ),
        def(
            super::SPEED_DEMON,
            "Speed Demon",
            "Complete a path in record time",
            "⚡",
            "#EF4444",
        ),
        def(
            super::MULTI_PATH,
            "Multi-Path Master",
            "Complete 3 different career paths",
            "🌟",
            "#8B5CF6",
        ),
    ]
}
