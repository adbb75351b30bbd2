use axum::response::IntoResponse;

use crate::template;

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: &'static str,
    pub services: Vec<ServiceCard>,
    pub values: Vec<ValueCard>,
    pub faqs: Vec<FaqItem>,
}

pub async fn page() -> impl IntoResponse {
    template::render(IndexTemplate {
        current_path: "/",
        services: services(),
        values: values(),
        faqs: faqs(),
    })
}

fn services() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Robot Process Automation",
            description: "Unsere erfahrenen RPA-Berater identifizieren die optimalen Prozesse für Automatisierungen in Ihrem Unternehmen. Anschließend konzipieren, entwickeln, integrieren und betreiben unsere RPA-Entwickler Ihre maßgeschneiderte RPA-Software und Infrastruktur.",
        },
        ServiceCard {
            title: "RPA meets KI",
            description: "Möchten Sie RPA und künstliche Intelligenz (KI) zur Steigerung der Effizienz in Ihrem gesamten Unternehmen einsetzen? Haben Sie quantitative und qualitative Ziele definiert, die Sie durch Automatisierungen erreichen möchten?",
        },
        ServiceCard {
            title: "Document Understanding",
            description: "Unsere fortschrittlichen KI-gesteuerten Software-Roboter revolutionieren die Verarbeitung Ihrer Dokumente. Sie lesen, verstehen und klassifizieren Rechnungen, Bestellungen, Quittungen und Aufträge automatisch.",
        },
        ServiceCard {
            title: "Machine Learning",
            description: "Unsere Experten beraten Sie zu den verfügbaren Standardlösungen auf dem Markt, unterstützen Sie bei der Integration eigener KI-Modelle und zeigen Ihnen, worauf es beim Einsatz von KI-Technologien ankommt.",
        },
        ServiceCard {
            title: "Pilotprojekt",
            description: "Haben Sie viel über RPA gehört und gelesen und möchten die Möglichkeiten von RPA in Ihrem Unternehmen testen? Im Rahmen eines Pilotprojekts zeigen wir Ihnen, was Software-Roboter können.",
        },
        ServiceCard {
            title: "Beratung",
            description: "Unsere Beraterinnen und Berater stehen Ihnen entlang der gesamten Robotic Process Automation (RPA) Wertschöpfungskette zur Seite. Wir bieten umfassende Beratung in den verschiedensten Bereichen.",
        },
    ]
}

fn values() -> Vec<ValueCard> {
    vec![
        ValueCard {
            title: "Implementierung",
            description: "Sie bringen das Prozesswissen ein, das automatisiert werden soll, und wir setzen es um. Gemeinsam automatisieren wir Ihre ersten Prozesse.",
        },
        ValueCard {
            title: "Gemeinsam",
            description: "Sie haben bereits RPA-Kompetenzen im Unternehmen aufgebaut? Wir ergänzen Ihr Team gezielt mit den RPA-Kompetenzen, die Ihnen noch fehlen oder in die Sie nicht investieren möchten.",
        },
        ValueCard {
            title: "Alles aus einer Hand",
            description: "Wir bieten Ihnen RPA als Managed Service an. Teilen Sie uns mit, welche Prozesse Sie in Ihrem Unternehmen starten möchten, und wir übernehmen die Installation und den Betrieb für Sie.",
        },
    ]
}

fn faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "Which processes are a good fit for automation?",
            answer: "Repetitive, rule-based work with structured input is the best starting point: invoice intake, order entry, report assembly, data reconciliation. We assess your candidates in a short discovery workshop.",
        },
        FaqItem {
            question: "How long does a pilot project take?",
            answer: "A typical pilot automates one process end to end within four to six weeks, including process analysis, bot development and a supervised production run.",
        },
        FaqItem {
            question: "Do we need our own RPA developers?",
            answer: "No. You can run RPA as a managed service with us, build up an internal team that we complement, or hand over operations entirely once the bots are stable.",
        },
        FaqItem {
            question: "How does AI fit into robotic process automation?",
            answer: "Machine learning extends bots beyond fixed rules: document understanding reads and classifies incoming paperwork, and trained models handle decisions that previously needed a human in the loop.",
        },
        FaqItem {
            question: "What does an engagement cost?",
            answer: "That depends on process complexity and the degree of operation you want from us. After the discovery workshop you receive a fixed offer for the pilot, with no obligation to continue.",
        },
    ]
}
