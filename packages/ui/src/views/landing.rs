use dioxus::prelude::*;

use crate::highlights::RotatingHighlights;
use crate::icons::{FaCrown, FaFileLines, FaLeaf, FaLightbulb, FaMicrophone, FaStar, FaStarHalf};
use crate::login_button::LoginButton;
use crate::{Icon, LANDING_IMAGE, LOGO};

pub const GROWTH_HIGHLIGHTS: [&str; 6] = [
    "Enhance your knowledge",
    "Achieve greater success",
    "Improve your health",
    "Develop better parenting skills",
    "Increase happiness",
    "Be the best version of yourself!",
];

pub const LEARNING_HIGHLIGHTS: [&str; 6] = [
    "Expand your learning",
    "Accomplish your goals",
    "Strengthen your vitality",
    "Become a better caregiver",
    "Improve your mood",
    "Maximize your abilities",
];

/// A line of copy with one emphasised fragment.
struct Emphasis {
    before: &'static str,
    bold: &'static str,
    after: &'static str,
}

struct Statistic {
    figure: &'static str,
    text: Emphasis,
}

const HABIT_STATISTICS: [Statistic; 3] = [
    Statistic {
        figure: "93%",
        text: Emphasis {
            before: "of Summarist members ",
            bold: "significantly increase",
            after: " reading frequency.",
        },
    },
    Statistic {
        figure: "96%",
        text: Emphasis {
            before: "of Summarist members ",
            bold: "establish better",
            after: " habits.",
        },
    },
    Statistic {
        figure: "90%",
        text: Emphasis {
            before: "have made ",
            bold: "significant positive",
            after: " change to their lives.",
        },
    },
];

const PRODUCTIVITY_STATISTICS: [Statistic; 3] = [
    Statistic {
        figure: "91%",
        text: Emphasis {
            before: "of Summarist members ",
            bold: "report feeling more productive",
            after: " after incorporating the service into their daily routine.",
        },
    },
    Statistic {
        figure: "94%",
        text: Emphasis {
            before: "of Summarist members have ",
            bold: "noticed an improvement",
            after: " in their overall comprehension and retention of information.",
        },
    },
    Statistic {
        figure: "88%",
        text: Emphasis {
            before: "of Summarist members ",
            bold: "feel more informed",
            after: " about current events and industry trends since using the platform.",
        },
    },
];

struct Review {
    name: &'static str,
    text: Emphasis,
}

const REVIEWS: [Review; 4] = [
    Review {
        name: "Hanna M.",
        text: Emphasis {
            before: "This app has been a ",
            bold: "game-changer",
            after: " for me! It's saved me so much time and effort in reading and comprehending books. Highly recommend it to all book lovers.",
        },
    },
    Review {
        name: "David B.",
        text: Emphasis {
            before: "I love this app! It provides ",
            bold: "concise and accurate summaries",
            after: " of books in a way that is easy to understand. It's also very user-friendly and intuitive.",
        },
    },
    Review {
        name: "Nathan S.",
        text: Emphasis {
            before: "This app is a great way to get the main takeaways from a book without having to read the entire thing. ",
            bold: "The summaries are well-written and informative.",
            after: " Definitely worth downloading.",
        },
    },
    Review {
        name: "Ryan R.",
        text: Emphasis {
            before: "If you're a busy person who ",
            bold: "loves reading but doesn't have the time",
            after: " to read every book in full, this app is for you! The summaries are thorough and provide a great overview of the book's content.",
        },
    },
];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 4] = [
    (
        "Actions",
        ["Summarist Magazine", "Cancel Subscription", "Help", "Contact us"],
    ),
    (
        "Useful Links",
        ["Pricing", "Summarist Business", "Gift Cards", "Authors & Publishers"],
    ),
    ("Company", ["About", "Careers", "Partners", "Code of Conduct"]),
    (
        "Other",
        ["Sitemap", "Legal Notice", "Terms of Service", "Privacy Policies"],
    ),
];

/// The marketing page served at `/`.
#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingNav {}
        LandingHero {}
        Features {}
        section {
            id: "statistics",
            class: "statistics",
            div {
                class: "container",
                RotatingHighlights {
                    phrases: to_strings(&GROWTH_HIGHLIGHTS),
                    StatisticList { set: StatisticSet::Habits }
                }
            }
        }
        section {
            id: "statistics-2",
            class: "statistics",
            div {
                class: "container",
                RotatingHighlights {
                    phrases: to_strings(&LEARNING_HIGHLIGHTS),
                    reversed: true,
                    StatisticList { set: StatisticSet::Productivity }
                }
            }
        }
        Reviews {}
        Numbers {}
        LandingFooter {}
    }
}

fn to_strings(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

#[component]
fn LandingNav() -> Element {
    rsx! {
        nav {
            class: "nav",
            div {
                class: "nav__wrapper",
                figure {
                    class: "nav__img--mask",
                    img { class: "nav__img", src: LOGO, alt: "logo" }
                }
                ul {
                    class: "nav__list--wrapper",
                    li {
                        class: "nav__list",
                        LoginButton { class: "nav__list--login" }
                    }
                    for item in ["About", "Contact", "Help"] {
                        li {
                            key: "{item}",
                            class: "nav__list nav__list--mobile",
                            style: "cursor: not-allowed",
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LandingHero() -> Element {
    rsx! {
        section {
            id: "landing",
            div {
                class: "container",
                div {
                    class: "landing__wrapper",
                    div {
                        class: "landing__content",
                        h1 { class: "landing__content__title", "Gain more knowledge in less time" }
                        p {
                            class: "landing__content__subtitle",
                            "Great summaries for busy people, individuals who barely have time to read, and even people who don't like to read."
                        }
                        LoginButton { class: "home__cta--btn" }
                    }
                    figure {
                        class: "landing__image--mask",
                        img { src: LANDING_IMAGE, alt: "landing" }
                    }
                }
            }
        }
    }
}

#[component]
fn Features() -> Element {
    rsx! {
        section {
            id: "features",
            div {
                class: "container",
                h2 { class: "section__title", "Understand books in few minutes" }
                div {
                    class: "features__wrapper",
                    div {
                        class: "features",
                        div { class: "features__icon", Icon { icon: FaFileLines, width: 56, height: 56 } }
                        h3 { class: "features__title", "Read or listen" }
                        p { class: "features__sub--title", "Save time by getting the core ideas from the best books." }
                    }
                    div {
                        class: "features",
                        div { class: "features__icon", Icon { icon: FaLightbulb, width: 56, height: 56 } }
                        h3 { class: "features__title", "Find your next read" }
                        p { class: "features__sub--title", "Explore book lists and personalized recommendations." }
                    }
                    div {
                        class: "features",
                        div { class: "features__icon", Icon { icon: FaMicrophone, width: 56, height: 56 } }
                        h3 { class: "features__title", "Briefcasts" }
                        p { class: "features__sub--title", "Gain valuable insights from briefcasts." }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatisticSet {
    Habits,
    Productivity,
}

impl StatisticSet {
    fn rows(self) -> &'static [Statistic] {
        match self {
            StatisticSet::Habits => &HABIT_STATISTICS,
            StatisticSet::Productivity => &PRODUCTIVITY_STATISTICS,
        }
    }
}

#[component]
fn StatisticList(set: StatisticSet) -> Element {
    rsx! {
        for row in set.rows() {
            div {
                key: "{row.figure}",
                class: "statistics__data",
                div { class: "statistics__data--number", "{row.figure}" }
                div {
                    class: "statistics__data--title",
                    "{row.text.before}"
                    b { "{row.text.bold}" }
                    "{row.text.after}"
                }
            }
        }
    }
}

#[component]
fn FiveStars() -> Element {
    rsx! {
        div {
            class: "review__stars",
            for i in 0..5 {
                Icon { key: "{i}", icon: FaStar, width: 16, height: 16 }
            }
        }
    }
}

#[component]
fn Reviews() -> Element {
    rsx! {
        section {
            id: "reviews",
            div {
                class: "container",
                h2 { class: "section__title", "What our members say" }
                div {
                    class: "reviews__wrapper",
                    for review in REVIEWS.iter() {
                        div {
                            key: "{review.name}",
                            class: "review",
                            div {
                                class: "review__header",
                                div { class: "review__name", "{review.name}" }
                                FiveStars {}
                            }
                            p {
                                class: "review__body",
                                "{review.text.before}"
                                b { "{review.text.bold}" }
                                "{review.text.after}"
                            }
                        }
                    }
                }
                div {
                    class: "reviews__btn--wrapper",
                    LoginButton { class: "home__cta--btn" }
                }
            }
        }
    }
}

#[component]
fn Numbers() -> Element {
    rsx! {
        section {
            id: "numbers",
            div {
                class: "container",
                h2 { class: "section__title", "Start growing with Summarist now" }
                div {
                    class: "numbers__wrapper",
                    div {
                        class: "numbers",
                        div { class: "numbers__icon", Icon { icon: FaCrown, width: 56, height: 56 } }
                        div { class: "numbers__title", "3 Million" }
                        div { class: "numbers__sub--title", "Downloads on all platforms" }
                    }
                    div {
                        class: "numbers",
                        div {
                            class: "numbers__icon numbers__star--icon",
                            Icon { icon: FaStar, width: 56, height: 56 }
                            Icon { icon: FaStarHalf, width: 56, height: 56 }
                        }
                        div { class: "numbers__title", "4.5 Stars" }
                        div { class: "numbers__sub--title", "Average ratings on iOS and Google Play" }
                    }
                    div {
                        class: "numbers",
                        div { class: "numbers__icon", Icon { icon: FaLeaf, width: 56, height: 56 } }
                        div { class: "numbers__title", "97%" }
                        div { class: "numbers__sub--title", "Of Summarist members create a better reading habit" }
                    }
                }
            }
        }
    }
}

#[component]
fn LandingFooter() -> Element {
    rsx! {
        footer {
            id: "footer",
            div {
                class: "container",
                div {
                    class: "footer__top--wrapper",
                    for (title, items) in FOOTER_COLUMNS {
                        div {
                            key: "{title}",
                            class: "footer__block",
                            h3 { class: "footer__link--title", "{title}" }
                            ul {
                                for item in items {
                                    li {
                                        key: "{item}",
                                        class: "footer__link--wrapper",
                                        a { class: "footer__link", href: "#", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "footer__copyright--wrapper",
                    p { class: "footer__copyright", "Copyright © 2023 Summarist." }
                }
            }
        }
    }
}
