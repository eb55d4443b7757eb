use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::reveal::FadeUp;
use crate::components::widgets::MagneticButton;
use crate::content::Project;
use crate::state::widgets::card_tilt;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub index: usize,
    pub btn_case: &'static str,
}

/// Alternating project row with a pointer-tracking 3D tilt card.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let tilt = use_state(|| (0.0f64, 0.0f64));

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            tilt.set(card_tilt(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_| tilt.set((0.0, 0.0)))
    };

    let project = props.project;
    let (rotate_x, rotate_y) = *tilt;
    let card_style = format!("transform: rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg);");
    let row_class = if props.index % 2 == 0 {
        "row-normal"
    } else {
        "row-reverse"
    };
    let badge = project.category.split(" · ").next().unwrap_or(project.category);

    html! {
        <div class={classes!("project-row", row_class)}>
            <a
                href={project.link}
                target="_blank"
                rel="noopener noreferrer"
                class="project-visual-wrapper"
                {onmousemove}
                {onmouseleave}
            >
                <div class="project-card-3d" style={card_style}>
                    <div class="project-image-inner">
                        <img src={project.img} alt={project.title} class="project-img-cover" />
                        <div class="project-hover-overlay" />
                        <div class="project-badge-container">
                            <div class="project-glass-badge">
                                <span class="dot-indicator" />
                                {badge}
                            </div>
                        </div>
                        <div class="project-center-btn">
                            <div class="view-case-circle">
                                <span class="view-text">{"VIEW"}</span>
                                <span class="view-arrow">{"↗"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </a>

            <div class="project-details">
                <div class="project-number-bg">{project.id}</div>
                <FadeUp>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-desc">{project.description}</p>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span key={*tag}>{*tag}</span> }) }
                    </div>
                    <div class="project-cta">
                        <MagneticButton href={project.link}>
                            <span class="btn-text">{props.btn_case}</span>
                            <div class="btn-icon">{"↗"}</div>
                        </MagneticButton>
                    </div>
                </FadeUp>
            </div>
        </div>
    }
}
