//! The sixteen film personalities.
//!
//! Pure reference data, indexed by [`ArchetypeCode::index`]. Entries must stay
//! in table order; `test_catalog_in_table_order` guards this.

use crate::types::{Archetype, ArchetypeCode};

/// Archetype returned when no genre carries any affinity signal
pub const DEFAULT_ARCHETYPE: ArchetypeCode = ArchetypeCode::Infj;

pub static ARCHETYPES: [Archetype; 16] = [
    Archetype {
        code: ArchetypeCode::Intj,
        name: "The Film Architect",
        tagline: "Analytical viewers who appreciate complex narratives",
        description: "You're drawn to films with intricate world-building, complex plot structures, and layers of meaning. You appreciate auteur cinema and films that reward careful analysis. Directors like Christopher Nolan, Denis Villeneuve, and the Wachowskis speak to your love of ambitious, thought-provoking cinema.",
        primary_genres: &["Science Fiction", "Thriller", "Mystery"],
        secondary_genres: &["Drama", "Crime", "Fantasy"],
        traits: &["Analytical", "Strategic", "Visionary", "Perfectionist"],
        quote: "You watch films like a chess master plays chess",
        icon: "🏛️",
        color: "#6B46C1",
    },
    Archetype {
        code: ArchetypeCode::Intp,
        name: "The Cinema Theorist",
        tagline: "Philosophical viewers drawn to experimental works",
        description: "You're fascinated by films that challenge conventions and explore abstract concepts. Meta-cinema, philosophical sci-fi, and intellectually challenging documentaries captivate you. Directors like Charlie Kaufman, Terrence Malick, and Shane Carruth align with your love of complex, unconventional storytelling.",
        primary_genres: &["Drama", "Science Fiction", "Documentary"],
        secondary_genres: &["Mystery", "Thriller", "Fantasy"],
        traits: &["Philosophical", "Curious", "Analytical", "Innovative"],
        quote: "You seek films that make you question reality itself",
        icon: "🧠",
        color: "#805AD5",
    },
    Archetype {
        code: ArchetypeCode::Entj,
        name: "The Genre Commander",
        tagline: "Strategic viewers with strong opinions",
        description: "You gravitate toward ambitious epics, films about power dynamics, and stories of strategic brilliance. You appreciate well-executed productions and commanding performances. Directors like Francis Ford Coppola, David Fincher, and Ridley Scott match your taste for powerful, ambitious cinema.",
        primary_genres: &["Action", "War", "History"],
        secondary_genres: &["Thriller", "Crime", "Biography"],
        traits: &["Decisive", "Ambitious", "Strategic", "Confident"],
        quote: "You watch films like a general studies battles",
        icon: "👑",
        color: "#553C9A",
    },
    Archetype {
        code: ArchetypeCode::Entp,
        name: "The Avant-Garde Debater",
        tagline: "Innovative viewers who love unconventional storytelling",
        description: "You thrive on films that break boundaries and challenge expectations. Clever dialogue, unreliable narrators, and genre-bending works excite you. Directors like Quentin Tarantino, Edgar Wright, and Wes Anderson appeal to your love of creative, unconventional cinema.",
        primary_genres: &["Comedy", "Science Fiction", "Crime"],
        secondary_genres: &["Thriller", "Mystery", "Adventure"],
        traits: &["Inventive", "Witty", "Bold", "Unconventional"],
        quote: "You love films that zigged when you expected them to zag",
        icon: "💡",
        color: "#9F7AEA",
    },
    Archetype {
        code: ArchetypeCode::Infj,
        name: "The Cinematic Visionary",
        tagline: "Empathetic viewers drawn to transformative stories",
        description: "You seek films with deep emotional resonance and meaningful themes. Stories about personal transformation, spiritual journeys, and the human condition move you. Directors like Hayao Miyazaki, Guillermo del Toro, and Bong Joon-ho create the kind of profound, layered cinema you cherish.",
        primary_genres: &["Drama", "Fantasy", "Romance"],
        secondary_genres: &["Science Fiction", "Animation", "Mystery"],
        traits: &["Empathetic", "Idealistic", "Insightful", "Passionate"],
        quote: "You feel films in your soul",
        icon: "✨",
        color: "#ED64A6",
    },
    Archetype {
        code: ArchetypeCode::Infp,
        name: "The Dreamer Cinephile",
        tagline: "Idealistic viewers who love poetic cinema",
        description: "You're drawn to emotionally rich, poetic films that explore the beauty and pain of existence. Coming-of-age stories, romantic dramas, and visually stunning animation resonate deeply with you. Directors like Studio Ghibli's filmmakers, Richard Linklater, and Greta Gerwig speak to your sensitive, artistic soul.",
        primary_genres: &["Romance", "Fantasy", "Animation"],
        secondary_genres: &["Drama", "Adventure", "Musical"],
        traits: &["Idealistic", "Creative", "Sensitive", "Authentic"],
        quote: "You find magic in the quietest moments",
        icon: "🌙",
        color: "#F687B3",
    },
    Archetype {
        code: ArchetypeCode::Enfj,
        name: "The Cultural Curator",
        tagline: "Charismatic viewers who champion diverse voices",
        description: "You're passionate about films that inspire, uplift, and represent diverse perspectives. Biopics of inspiring figures, socially conscious dramas, and uplifting musicals energize you. Directors like Ava DuVernay, Damien Chazelle, and Barry Jenkins create the kind of meaningful, impactful cinema you advocate for.",
        primary_genres: &["Drama", "Biography", "Musical"],
        secondary_genres: &["Romance", "History", "Documentary"],
        traits: &["Charismatic", "Inspiring", "Empathetic", "Organized"],
        quote: "You believe in cinema's power to change the world",
        icon: "🌟",
        color: "#FC8181",
    },
    Archetype {
        code: ArchetypeCode::Enfp,
        name: "The Genre Explorer",
        tagline: "Enthusiastic viewers with eclectic tastes",
        description: "Your film taste is wonderfully unpredictable. You love discovering hidden gems, exploring new genres, and sharing your latest cinematic obsession. From whimsical adventures to quirky comedies to heartfelt dramas, filmmakers like Taika Waititi, Michel Gondry, and the Daniels capture your playful, adventurous spirit.",
        primary_genres: &["Adventure", "Comedy", "Fantasy"],
        secondary_genres: &["Drama", "Romance", "Science Fiction"],
        traits: &["Enthusiastic", "Creative", "Spontaneous", "Open-minded"],
        quote: "Your watchlist is an adventure waiting to happen",
        icon: "🎨",
        color: "#F6AD55",
    },
    Archetype {
        code: ArchetypeCode::Istj,
        name: "The Classic Film Archivist",
        tagline: "Traditional viewers with appreciation for film history",
        description: "You have deep respect for the classics and the craft of filmmaking. Well-structured narratives, historical accuracy, and timeless stories appeal to you. Directors like Clint Eastwood, Steven Spielberg (his historical works), and the masters of classic cinema align with your appreciation for tradition and quality.",
        primary_genres: &["History", "War", "Western"],
        secondary_genres: &["Drama", "Crime", "Biography"],
        traits: &["Reliable", "Detail-oriented", "Traditional", "Principled"],
        quote: "You honor cinema's rich heritage",
        icon: "📚",
        color: "#4A5568",
    },
    Archetype {
        code: ArchetypeCode::Isfj,
        name: "The Comfort Viewer",
        tagline: "Loyal viewers who cherish heartwarming stories",
        description: "You love films that make you feel at home. Heartwarming family stories, gentle romances, and comforting dramas are your sanctuary. Directors like Nancy Meyers, Nora Ephron, and Studio Ghibli create the warm, nurturing cinema that speaks to your caring nature.",
        primary_genres: &["Romance", "Family", "Drama"],
        secondary_genres: &["Comedy", "Animation", "Fantasy"],
        traits: &["Caring", "Loyal", "Practical", "Supportive"],
        quote: "You find comfort in the familiar embrace of good storytelling",
        icon: "🏡",
        color: "#718096",
    },
    Archetype {
        code: ArchetypeCode::Estj,
        name: "The Blockbuster Strategist",
        tagline: "Practical viewers who enjoy well-crafted entertainment",
        description: "You appreciate films that deliver exactly what they promise. Well-executed action, tight thrillers, and smart crime dramas satisfy your taste for efficiency and quality. Directors like Michael Mann, Tony Scott, and Tom Cruise's recent collaborators create the polished, professional cinema you respect.",
        primary_genres: &["Action", "Thriller", "Crime"],
        secondary_genres: &["War", "History", "Adventure"],
        traits: &["Organized", "Practical", "Direct", "Traditional"],
        quote: "You value execution over experimentation",
        icon: "🎯",
        color: "#2D3748",
    },
    Archetype {
        code: ArchetypeCode::Esfj,
        name: "The Social Cinephile",
        tagline: "Community-oriented viewers drawn to crowd-pleasers",
        description: "You love films that bring people together. Feel-good comedies, romantic dramedies, and emotionally satisfying dramas are perfect for your movie nights. Directors like Jon M. Chu, rom-com specialists, and ensemble comedy masters create the communal, heartfelt cinema you adore.",
        primary_genres: &["Comedy", "Romance", "Drama"],
        secondary_genres: &["Musical", "Family", "Adventure"],
        traits: &["Sociable", "Caring", "Organized", "Cooperative"],
        quote: "Cinema is better when shared with others",
        icon: "🎭",
        color: "#4299E1",
    },
    Archetype {
        code: ArchetypeCode::Istp,
        name: "The Craft Appreciator",
        tagline: "Technical viewers fascinated by filmmaking techniques",
        description: "You're captivated by the mechanics of cinema. Practical effects, impressive stunts, and technical mastery draw you in. Action choreography, clever editing, and visual innovation excite you. Directors like George Miller, the Russo Brothers, and John Wick's Chad Stahelski showcase the craftsmanship you admire.",
        primary_genres: &["Action", "Thriller", "Science Fiction"],
        secondary_genres: &["Crime", "War", "Adventure"],
        traits: &["Practical", "Observant", "Independent", "Logical"],
        quote: "You appreciate the how as much as the what",
        icon: "🔧",
        color: "#38B2AC",
    },
    Archetype {
        code: ArchetypeCode::Isfp,
        name: "The Visual Aesthete",
        tagline: "Artistic viewers drawn to beautiful cinematography",
        description: "You experience cinema through its visual and emotional beauty. Stunning cinematography, artistic animation, and aesthetically rich fantasies transport you. Directors like Wes Anderson, Wong Kar-wai, and Pixar's best create the sensory masterpieces that speak to your artistic soul.",
        primary_genres: &["Animation", "Fantasy", "Romance"],
        secondary_genres: &["Drama", "Adventure", "Musical"],
        traits: &["Artistic", "Sensitive", "Flexible", "Spontaneous"],
        quote: "Every frame is a painting for you",
        icon: "🎨",
        color: "#48BB78",
    },
    Archetype {
        code: ArchetypeCode::Estp,
        name: "The Thrill Seeker",
        tagline: "Bold viewers who love high-octane entertainment",
        description: "You want cinema that gets your adrenaline pumping. Intense action, edge-of-your-seat thrillers, and visceral horror excite you. You're here for the experience, the spectacle, the rush. Directors like James Cameron, Sam Raimi, and modern action maestros deliver the thrills you crave.",
        primary_genres: &["Action", "Horror", "Thriller"],
        secondary_genres: &["Adventure", "Crime", "Science Fiction"],
        traits: &["Bold", "Energetic", "Action-oriented", "Spontaneous"],
        quote: "You live for the rush",
        icon: "⚡",
        color: "#F56565",
    },
    Archetype {
        code: ArchetypeCode::Esfp,
        name: "The Entertainment Enthusiast",
        tagline: "Fun-loving viewers who enjoy feel-good movies",
        description: "You watch films to have a great time! Laugh-out-loud comedies, spectacular musicals, and fun adventures are your jam. You appreciate spectacle, joy, and entertainment value. Directors like Jon Favreau, musical specialists, and comedy masters create the pure fun cinema you celebrate.",
        primary_genres: &["Comedy", "Musical", "Adventure"],
        secondary_genres: &["Action", "Romance", "Fantasy"],
        traits: &["Enthusiastic", "Spontaneous", "Playful", "Optimistic"],
        quote: "Cinema is meant to be enjoyed!",
        icon: "🎉",
        color: "#ED8936",
    },
];

/// Look up the record for a code
pub fn archetype(code: ArchetypeCode) -> &'static Archetype {
    &ARCHETYPES[code.index()]
}

/// The fallback archetype, "The Cinematic Visionary"
pub fn default_archetype() -> &'static Archetype {
    archetype(DEFAULT_ARCHETYPE)
}
