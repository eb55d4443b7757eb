use yew::prelude::*;

use crate::components::projects::ProjectCard;
use crate::components::reveal::{FadeUp, ImageReveal, MaskText};
use crate::components::widgets::{EmailCopyButton, FaqAccordion, MagneticButton, ToolsCarousel};
use crate::content::{
    self, BEHANCE_URL, INSTAGRAM_URL, LINKEDIN_URL, PORTFOLIO_PDF, SKILL_PILLS,
};
use crate::prefs::Language;

const PROCESS_ICONS: [&str; 4] = ["⌕", "⚡", "✎", "➤"];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub language: Language,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &SectionProps) -> Html {
    let hero = &content::for_language(props.language).hero;

    html! {
        <section id="hero" class="hero-section container">
            <div class="hero-content">
                <div>
                    <MaskText delay_ms={500}>
                        <span class="label-editorial">
                            <span class="dot-accent" />{hero.role}
                        </span>
                    </MaskText>
                    <h1 class="display-text">
                        <MaskText delay_ms={600}>{hero.title_part1}</MaskText>
                        <MaskText delay_ms={700}>
                            {hero.title_part2}{" "}
                            <span class="italic">{hero.title_part2_italic}</span>
                        </MaskText>
                        <MaskText delay_ms={800}>
                            <span class="outline">{hero.title_part3}</span>
                        </MaskText>
                    </h1>
                </div>
                <FadeUp class="hero-description" delay_ms={1200}>
                    <p>{hero.desc}</p>
                    <a href="#work" class="btn-editorial">{hero.btn}</a>
                </FadeUp>
            </div>
            <div class="hero-scroll-hint">
                <span>{hero.scroll}</span>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section(props: &SectionProps) -> Html {
    let t = content::for_language(props.language);
    let about = &t.about;
    let services = &t.services;

    html! {
        <section id="about" class="section container">
            <div class="about-grid">
                <FadeUp>
                    <div class="about-sticky">
                        <MaskText>
                            <span class="label-editorial"><span class="dot-accent" />{about.label}</span>
                        </MaskText>
                        <MaskText>
                            <h2 class="title-editorial">
                                {about.title}<br />{"Thales"}<span class="accent">{"."}</span>
                            </h2>
                        </MaskText>
                        <div class="skill-pills">
                            { for SKILL_PILLS.iter().map(|pill| html! {
                                <span key={*pill} class="skill-pill">{*pill}</span>
                            }) }
                        </div>
                        <ImageReveal src="/fotoportfolio.jpg" alt="Thales Sossella" />
                    </div>
                </FadeUp>
                <div>
                    <FadeUp delay_ms={200}>
                        <blockquote class="quote">{format!("\u{201c}{}\u{201d}", about.quote)}</blockquote>
                    </FadeUp>
                    <FadeUp delay_ms={300}>
                        <h3 class="section-subtitle">{about.section1_title}</h3>
                        <p class="section-body">{about.section1_desc}</p>
                    </FadeUp>
                    <FadeUp delay_ms={400}>
                        <h3 class="section-subtitle">{about.section2_title}</h3>
                        <p>{about.section2_desc}</p>
                    </FadeUp>
                    <FadeUp delay_ms={500}>
                        <div class="glass-card">
                            <div><h3 class="stat-value">{"1+"}</h3><span class="stat-label">{about.stats.exp}</span></div>
                            <div><h3 class="stat-value">{"30+"}</h3><span class="stat-label">{about.stats.screens}</span></div>
                            <div><h3 class="stat-value">{"100%"}</h3><span class="stat-label">{about.stats.focus}</span></div>
                        </div>
                    </FadeUp>
                    <FadeUp delay_ms={600}>
                        <a href={PORTFOLIO_PDF} download="" class="btn-editorial download-btn">
                            {"⤓ "}{t.nav.download}
                        </a>
                    </FadeUp>
                </div>
            </div>

            <div id="services" class="services-block">
                <FadeUp>
                    <span class="label-editorial"><span class="dot-accent" />{services.label}</span>
                    <MaskText>
                        <h3 class="title-editorial">{services.title}<span class="accent">{"."}</span></h3>
                    </MaskText>
                    <div class="services-list">
                        { for services.list.iter().map(|service| html! {
                            <div key={service.id} class="service-item">
                                <div class="service-heading">
                                    <span class="service-number">{service.id}</span>
                                    <h4 class="service-title">{service.title}</h4>
                                </div>
                                <p class="service-desc">{service.desc}</p>
                                <span class="service-arrow">{"↗"}</span>
                            </div>
                        }) }
                    </div>
                </FadeUp>
            </div>

            <div class="full-width-breakout">
                <FadeUp delay_ms={700}>
                    <div class="stack-label">{services.stack_label}</div>
                    <ToolsCarousel />
                </FadeUp>
            </div>
        </section>
    }
}

#[function_component(WorkSection)]
pub fn work_section(props: &SectionProps) -> Html {
    let projects = &content::for_language(props.language).projects;

    html! {
        <section id="work" class="section container">
            <FadeUp>
                <span class="label-editorial"><span class="dot-accent" />{projects.label}</span>
                <MaskText>
                    <h2 class="title-editorial">{projects.title}<span class="accent">{"."}</span></h2>
                </MaskText>
            </FadeUp>
            <div class="project-list">
                { for projects.list.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard
                        key={project.id}
                        {project}
                        {index}
                        btn_case={projects.btn_case}
                    />
                }) }
            </div>
            <FadeUp delay_ms={200}>
                <div class="view-more-container">
                    <p>{projects.view_more}</p>
                    <MagneticButton href={BEHANCE_URL}>
                        <span class="btn-text">{projects.btn_behance}</span>
                        <div class="btn-icon">{"↗"}</div>
                    </MagneticButton>
                </div>
            </FadeUp>
        </section>
    }
}

#[function_component(ProcessSection)]
pub fn process_section(props: &SectionProps) -> Html {
    let process = &content::for_language(props.language).process;

    html! {
        <section class="section container process-section">
            <FadeUp>
                <div class="process-heading">
                    <MaskText>
                        <h2 class="title-editorial">
                            {process.title}{" "}
                            <span class="italic accent">{process.title_italic}</span>
                        </h2>
                    </MaskText>
                    <div class="heading-rule" />
                </div>
            </FadeUp>
            <div class="process-grid-modern">
                { for process.steps.iter().enumerate().map(|(idx, step)| html! {
                    <FadeUp key={idx} delay_ms={(idx as u32) * 100} class="process-step-card">
                        <div class="step-number">{format!("0{}", idx + 1)}</div>
                        <div class="step-content">
                            <div class="step-icon-wrapper">{PROCESS_ICONS[idx % PROCESS_ICONS.len()]}</div>
                            <h4 class="step-title">{step.title}</h4>
                            <p class="step-description">{step.desc}</p>
                            <ul class="step-tags">
                                { for step.tags.iter().map(|tag| html! { <li key={*tag}>{*tag}</li> }) }
                            </ul>
                        </div>
                        <div class="card-glow" />
                    </FadeUp>
                }) }
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
pub fn faq_section(props: &SectionProps) -> Html {
    let faq = &content::for_language(props.language).faq;

    html! {
        <section id="faq" class="section container">
            <FadeUp>
                <div class="faq-heading">
                    <span class="label-editorial centered"><span class="dot-accent" />{faq.label}</span>
                    <MaskText>
                        <h2 class="title-editorial">
                            {faq.title}<br />
                            <span class="italic">{faq.title_italic}</span>
                        </h2>
                    </MaskText>
                </div>
                <FaqAccordion language={props.language} />
            </FadeUp>
        </section>
    }
}

fn local_time_hhmm() -> String {
    let date = js_sys::Date::new_0();
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

#[function_component(ContactSection)]
pub fn contact_section(props: &SectionProps) -> Html {
    let contact = &content::for_language(props.language).contact;

    html! {
        <section id="contact" class="contact-section container">
            <FadeUp>
                <div class="contact-label-row">
                    <span class="label contact-label">{contact.label}</span>
                </div>
                <MaskText>
                    <h2 class="big-cta-text">{contact.title}<br />{contact.title_break}</h2>
                </MaskText>
                <div class="email-row">
                    <EmailCopyButton language={props.language} />
                </div>
                <div class="footer-grid">
                    <div class="footer-col">
                        <h4>{contact.location}</h4>
                        <p>{"Curitiba, Brazil"}</p>
                        <p class="footer-dim">{format!("Local time: {}", local_time_hhmm())}</p>
                    </div>
                    <div class="footer-col">
                        <h4>{contact.socials}</h4>
                        <div class="social-list">
                            <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class="social-link">{"LinkedIn ↗"}</a>
                            <a href={BEHANCE_URL} target="_blank" rel="noopener noreferrer" class="social-link">{"Behance ↗"}</a>
                            <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-link">{"Instagram ↗"}</a>
                        </div>
                    </div>
                    <div class="footer-col">
                        <h4>{"Credits"}</h4>
                        <p class="footer-credits">{contact.credits}</p>
                    </div>
                </div>
                <div class="footer-watermark">{"SOSSELLA"}</div>
            </FadeUp>
        </section>
    }
}
