use leptos::prelude::*;
use leptos_router::components::A;

use crate::calendar::PlacementPolicy;
use crate::content;
use crate::views::search_bar::SearchBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <HeroSection/>
            <RoomsSection/>
            <AmenitiesSection/>
            <GallerySection/>
            <TestimonialsSection/>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <video
                class="hero-video"
                src=content::HERO_VIDEO_URL
                poster=content::HERO_POSTER_URL
                autoplay=true
                muted=true
                playsinline=true
            ></video>
            <div class="hero-overlay">
                <h1>"Wake up by the water"</h1>
                <p>"Boutique stays in six harbour cities"</p>
                // the hero sits low on small screens, so let calendars flip upward
                <SearchBar policy=PlacementPolicy::Auto/>
            </div>
        </section>
    }
}

#[component]
fn RoomsSection() -> impl IntoView {
    view! {
        <section class="rooms">
            <h2>"Rooms & suites"</h2>
            <div class="room-grid">
                {content::rooms()
                    .into_iter()
                    .map(|room| {
                        let href = format!("/booking?room={}", room.slug);
                        view! {
                            <article class="room-card">
                                <img src=room.image_url alt=room.name.clone()/>
                                <h3>{room.name}</h3>
                                <p>{room.description}</p>
                                <p class="room-meta">
                                    {format!("From €{} / night · up to {} guests", room.nightly_rate, room.max_guests)}
                                </p>
                                <A href=href>"Book this room"</A>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AmenitiesSection() -> impl IntoView {
    view! {
        <section class="amenities">
            <h2>"Amenities"</h2>
            <ul class="amenity-list">
                {content::amenities()
                    .into_iter()
                    .map(|amenity| {
                        view! {
                            <li class="amenity">
                                <h3>{amenity.title}</h3>
                                <p>{amenity.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn GallerySection() -> impl IntoView {
    view! {
        <section class="gallery">
            <h2>"Gallery"</h2>
            <div class="gallery-grid">
                {content::gallery()
                    .into_iter()
                    .map(|image| {
                        view! {
                            <figure class="gallery-item">
                                <img src=image.url alt=image.caption.clone() loading="lazy"/>
                                <figcaption>{image.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"What guests say"</h2>
            <div class="testimonial-list">
                {content::testimonials()
                    .into_iter()
                    .map(|testimonial| {
                        let stars = "★".repeat(testimonial.rating as usize);
                        view! {
                            <blockquote class="testimonial">
                                <p>{testimonial.quote}</p>
                                <footer>
                                    <span class="testimonial-rating">{stars}</span>
                                    {format!(" {} · {}", testimonial.author, testimonial.location)}
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
