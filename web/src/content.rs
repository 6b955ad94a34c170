use shared_types::{Amenity, City, GalleryImage, Room, Testimonial};

pub const HERO_VIDEO_URL: &str = "/media/hero-harbour.mp4";
pub const HERO_POSTER_URL: &str = "/media/hero-harbour.jpg";

pub fn cities() -> Vec<City> {
    [
        ("Lisbon", "Portugal"),
        ("Porto", "Portugal"),
        ("Barcelona", "Spain"),
        ("Seville", "Spain"),
        ("Nice", "France"),
        ("Florence", "Italy"),
    ]
    .into_iter()
    .map(|(name, country)| City {
        name: name.to_string(),
        country: country.to_string(),
    })
    .collect()
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            slug: "classic-double".to_string(),
            name: "Classic Double".to_string(),
            description: "Queen bed, courtyard view and a rain shower.".to_string(),
            nightly_rate: 140,
            max_guests: 2,
            image_url: "/media/rooms/classic-double.jpg".to_string(),
        },
        Room {
            slug: "harbour-suite".to_string(),
            name: "Harbour Suite".to_string(),
            description: "Separate lounge, balcony over the water, freestanding bath.".to_string(),
            nightly_rate: 290,
            max_guests: 3,
            image_url: "/media/rooms/harbour-suite.jpg".to_string(),
        },
        Room {
            slug: "family-loft".to_string(),
            name: "Family Loft".to_string(),
            description: "Two bedrooms under the eaves with a kitchenette.".to_string(),
            nightly_rate: 340,
            max_guests: 6,
            image_url: "/media/rooms/family-loft.jpg".to_string(),
        },
    ]
}

pub fn find_room(slug: &str) -> Option<Room> {
    rooms().into_iter().find(|room| room.slug == slug)
}

pub fn amenities() -> Vec<Amenity> {
    [
        ("Rooftop pool", "Heated year round, open until midnight."),
        ("Spa & hammam", "Treatments bookable at the front desk."),
        ("Breakfast included", "Local pastries and a hot kitchen until 11."),
        ("Airport transfer", "Private car on request."),
    ]
    .into_iter()
    .map(|(title, description)| Amenity {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn gallery() -> Vec<GalleryImage> {
    [
        ("lobby", "The lobby at dusk"),
        ("pool", "Rooftop pool"),
        ("suite", "Harbour Suite balcony"),
        ("breakfast", "Breakfast terrace"),
        ("spa", "Hammam"),
        ("bar", "Cocktail bar"),
    ]
    .into_iter()
    .map(|(file, caption)| GalleryImage {
        url: format!("/media/gallery/{}.jpg", file),
        caption: caption.to_string(),
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Marta K.".to_string(),
            location: "Kraków".to_string(),
            quote: "The suite balcony alone was worth the trip.".to_string(),
            rating: 5,
        },
        Testimonial {
            author: "James O.".to_string(),
            location: "Leeds".to_string(),
            quote: "Quiet rooms, lovely staff, breakfast we still talk about.".to_string(),
            rating: 5,
        },
        Testimonial {
            author: "Inès D.".to_string(),
            location: "Lyon".to_string(),
            quote: "Booked the loft for the kids, plenty of space for all of us.".to_string(),
            rating: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_slugs_are_unique() {
        let rooms = rooms();
        let mut slugs: Vec<_> = rooms.iter().map(|r| r.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), rooms.len());
    }

    #[test]
    fn test_find_room() {
        assert_eq!(find_room("harbour-suite").map(|r| r.max_guests), Some(3));
        assert!(find_room("penthouse").is_none());
    }
}
