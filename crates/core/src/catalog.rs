//! Static content: hub sections, section pages and reflection scenes.

use crate::error::Error;
use crate::model::{
    DEFAULT_UNLOCK_THRESHOLD, Facet, FacetDetail, MediaRef, Quadrant, Scene, SceneId, Section,
    SectionId, SectionPage, SegmentId, Tone, UnlockPolicy,
};

pub const PHILOSOPHICAL_PATH: &str = "/philosophical_self";
pub const PSYCHOLOGICAL_PATH: &str = "/psychological_self";
pub const PHYSICAL_PATH: &str = "/physical_self";
pub const SEXUAL_PATH: &str = "/sexual_self";
pub const REFLECTION_PATH: &str = "/reflection";

/// Everything the presentation needs, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
    pages: Vec<SectionPage>,
    scenes: Vec<Scene>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `Error` if a page does not match a section, or if two entries
    /// share a path or segment.
    pub fn new(
        sections: Vec<Section>,
        pages: Vec<SectionPage>,
        scenes: Vec<Scene>,
    ) -> Result<Self, Error> {
        for (i, section) in sections.iter().enumerate() {
            let duplicate = sections[..i]
                .iter()
                .any(|other| other.path == section.path || other.segment == section.segment);
            if duplicate {
                return Err(Error::Catalog(format!("duplicate section {}", section.path)));
            }
        }
        for page in &pages {
            if !sections.iter().any(|section| section.path == page.path) {
                return Err(Error::Catalog(format!("page {} has no hub section", page.path)));
            }
        }
        Ok(Self {
            sections,
            pages,
            scenes,
        })
    }

    /// The four selves and the closing reflection.
    ///
    /// # Errors
    ///
    /// Returns `Error` only if the built-in content fails validation.
    pub fn standard() -> Result<Self, Error> {
        Self::new(
            standard_sections()?,
            vec![
                philosophical_page()?,
                psychological_page()?,
                physical_page()?,
                sexual_page()?,
            ],
            reflection_scenes()?,
        )
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, segment: SegmentId) -> Option<&Section> {
        self.sections.iter().find(|section| section.segment == segment)
    }

    #[must_use]
    pub fn page_by_slug(&self, slug: &str) -> Option<&SectionPage> {
        self.pages.iter().find(|page| page.path.slug() == slug)
    }

    #[must_use]
    pub fn page(&self, path: &SectionId) -> Option<&SectionPage> {
        self.pages.iter().find(|page| page.path == *path)
    }

    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Every hub section is trackable.
    ///
    /// # Errors
    ///
    /// Returns `Error` if `threshold` cannot be met by the hub sections.
    pub fn unlock_policy(&self, threshold: usize) -> Result<UnlockPolicy, Error> {
        let tracked = self.sections.iter().map(|section| section.path.clone());
        Ok(UnlockPolicy::new(threshold, tracked)?)
    }

    /// # Errors
    ///
    /// See [`Catalog::unlock_policy`].
    pub fn default_policy(&self) -> Result<UnlockPolicy, Error> {
        self.unlock_policy(DEFAULT_UNLOCK_THRESHOLD)
    }
}

fn media(url: &str) -> Result<MediaRef, Error> {
    Ok(MediaRef::new(url)?)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn detail(title: &str, description: &str, image: &str) -> Result<FacetDetail, Error> {
    Ok(FacetDetail {
        title: title.to_string(),
        description: description.to_string(),
        image: Some(media(image)?),
    })
}

#[allow(clippy::too_many_lines)]
fn standard_sections() -> Result<Vec<Section>, Error> {
    Ok(vec![
        Section {
            segment: SegmentId::new(1),
            name: "Philosophy".into(),
            path: SectionId::new(PHILOSOPHICAL_PATH)?,
            kanji: "哲学".into(),
            translation: "philosophy".into(),
            sub_meanings: strings(&["Self-awareness", "Identity", "Values", "Personal Meaning"]),
            background: media(
                "https://upload.wikimedia.org/wikipedia/commons/4/49/%22The_School_of_Athens%22_by_Raffaello_Sanzio_da_Urbino.jpg",
            )?,
            quadrant: Quadrant::TopLeft,
        },
        Section {
            segment: SegmentId::new(2),
            name: "Psychology".into(),
            path: SectionId::new(PSYCHOLOGICAL_PATH)?,
            kanji: "心理".into(),
            translation: "psychology".into(),
            sub_meanings: strings(&["Emotions", "Self-concept", "Self-esteem", "Self-beliefs"]),
            background: media(
                "https://images.unsplash.com/photo-1666330404750-061d4858593b?q=80&w=764&auto=format&fit=crop",
            )?,
            quadrant: Quadrant::TopRight,
        },
        Section {
            segment: SegmentId::new(3),
            name: "Physical".into(),
            path: SectionId::new(PHYSICAL_PATH)?,
            kanji: "身体".into(),
            translation: "physical".into(),
            sub_meanings: strings(&["Vitality", "Sensation", "Body Image", "Physical Limits"]),
            background: media(
                "https://images.unsplash.com/photo-1659019730080-eb6adcdd996c?q=80&w=1171&auto=format&fit=crop",
            )?,
            quadrant: Quadrant::BottomLeft,
        },
        Section {
            segment: SegmentId::new(4),
            name: "Sexual".into(),
            path: SectionId::new(SEXUAL_PATH)?,
            kanji: "性愛".into(),
            translation: "sexual".into(),
            sub_meanings: strings(&["Intimacy", "Orientation", "Desire", "Boundaries"]),
            background: media(
                "https://images.unsplash.com/photo-1516476573449-6fc45bb2f602?q=80&w=1173&auto=format&fit=crop",
            )?,
            quadrant: Quadrant::BottomRight,
        },
    ])
}

#[allow(clippy::too_many_lines)]
fn philosophical_page() -> Result<SectionPage, Error> {
    Ok(SectionPage {
        path: SectionId::new(PHILOSOPHICAL_PATH)?,
        title: "The Philosophical Self".into(),
        epigraph: Some("The soul never thinks without a picture.".into()),
        facets: vec![
            Facet {
                segment: SegmentId::new(11),
                title: "Nutritive Soul".into(),
                subtitle: None,
                description: "This soul serves as our reminder for the basic needs for human growth ensuring to take care of one's physical self.".into(),
                tone: Tone::Green,
                details: vec![
                    detail(
                        "MORNING WALKS",
                        "I prefer talking morning walks, as it helps me freshen my mind..",
                        "https://images.unsplash.com/photo-1649134296132-56606326c566?auto=format&fit=crop&q=80&w=400",
                    )?,
                    detail(
                        "EATING",
                        "Eating is one of the many essential things when it comes to taking care of my physical body..",
                        "https://st3.depositphotos.com/17500018/35124/i/450/depositphotos_351247046-stock-photo-african-american-man-bites-hamburger.jpg",
                    )?,
                    detail(
                        "PHYSICAL TRAINING",
                        "I believe having a good workout routine means a better and disciplined body..",
                        "https://st3.depositphotos.com/11233746/15398/i/450/depositphotos_153986034-stock-photo-man-taking-dumbbells-at-gym.jpg",
                    )?,
                ],
            },
            Facet {
                segment: SegmentId::new(12),
                title: "Appetitive Soul".into(),
                subtitle: None,
                description: "The appetitive soul is the source of motivation and movement, driven by the intensity of one's desires.".into(),
                tone: Tone::Orange,
                details: vec![
                    detail(
                        "CODING",
                        "My desire for coding is to be able to create anything I think of, it's one of my passions and dream to become a great developer someday..",
                        "https://st5.depositphotos.com/41571362/79615/i/450/depositphotos_796154152-stock-photo-human-hand-pointing-abstract-modern.jpg",
                    )?,
                    detail(
                        "BADMINTON",
                        "Getting more active into badminton lately, I've been enjoying this sport and has been the fuel for me to play it more..",
                        "https://st3.depositphotos.com/13324256/16676/i/450/depositphotos_166767508-stock-photo-badminton-racket-and-shuttlecocks.jpg",
                    )?,
                    detail(
                        "PRESENTATION",
                        "I want to be able to improve this skill as it will enable me to openly express my ideas and initiatives towards my projects to help the community..",
                        "https://st4.depositphotos.com/3917667/29380/i/450/depositphotos_293806820-stock-photo-male-speaker-giving-presentation-in.jpg",
                    )?,
                ],
            },
            Facet {
                segment: SegmentId::new(13),
                title: "Rational Soul".into(),
                subtitle: None,
                description: "This is the support behind the 2 other souls and act as a balance, one to prevent you from not taking care of yourself, and the other to oppose strong desires and maintain good balance, this leads as the main guardian to protect your soul and keep the balance in tact. It is the seat of intellect and reason.".into(),
                tone: Tone::Blue,
                details: vec![
                    detail(
                        "BRAIN",
                        "The brain represents the rational soul more, as it is symbolic for the thinking process of everything that occurs within the human body..",
                        "https://images.unsplash.com/photo-1711409645921-ef3db0501f96?auto=format&fit=crop&q=80&w=400",
                    )?,
                    detail(
                        "CRITICAL THINKING",
                        "I believe critical thinking also stems from the rational soul, as it is one of the things that are necessary to maintain sanity and reasonability..",
                        "https://images.unsplash.com/photo-1699993131854-a1cde51ce9da?auto=format&fit=crop&q=80&w=400",
                    )?,
                    detail(
                        "JUDGEMENT",
                        "Being able to judge is being able to think, I believe judgement as one of the most basic functions that are within the rational soul..",
                        "https://images.unsplash.com/photo-1767972159871-b9f5d320be2b?auto=format&fit=crop&q=80&w=400",
                    )?,
                ],
            },
        ],
    })
}

#[allow(clippy::too_many_lines)]
fn psychological_page() -> Result<SectionPage, Error> {
    Ok(SectionPage {
        path: SectionId::new(PSYCHOLOGICAL_PATH)?,
        title: "The Psychological Self".into(),
        epigraph: Some("Nobody is stupid all the time, but everyone can be stupid sometimes.".into()),
        facets: vec![
            Facet {
                segment: SegmentId::new(21),
                title: "Material Self".into(),
                subtitle: None,
                description: "Focuses on the physical body and possessions that shape our identity in the material world.".into(),
                tone: Tone::Green,
                details: vec![
                    detail(
                        "HEIGHT",
                        "I see myself a smaller than average for my height compared to others..",
                        "https://images.unsplash.com/photo-1472457897821-70d3819a0e24?auto=format&fit=crop&q=80&w=400",
                    )?,
                    detail(
                        "BODY WEIGHT",
                        "My weight is off the lower than average type..",
                        "https://images.unsplash.com/photo-1590285381943-9fbf39f4f75d?q=80&w=1170&auto=format&fit=crop",
                    )?,
                    detail(
                        "SLEEP DEPRIVED",
                        "I have a bad habit of staying up and being sleepy all day..",
                        "https://images.unsplash.com/photo-1599223031712-68b05f38d5f5?q=80&w=1176&auto=format&fit=crop",
                    )?,
                ],
            },
            Facet {
                segment: SegmentId::new(22),
                title: "Social Self".into(),
                subtitle: None,
                description: "Represents our external interactions and the recognition we receive from those around us.".into(),
                tone: Tone::Orange,
                details: vec![
                    detail(
                        "HANGING OUT",
                        "I enjoy the company of other people especially my friends when we are hanging out..",
                        "https://images.unsplash.com/photo-1502444330042-d1a1ddf9bb5b?q=80&w=1173&auto=format&fit=crop",
                    )?,
                    detail(
                        "AMIABLE",
                        "I like to try my best to talk with random people especially at a social event, I tend to enjoy knowing what others do..",
                        "https://images.unsplash.com/photo-1586806974856-c55e8b9364e4?q=80&w=1170&auto=format&fit=crop",
                    )?,
                    detail(
                        "COOPERATIVE",
                        "Most of the time in a team organized event, I try to listen to others especially when I'm the one leading the team or listen to other team leaders if I am their member..",
                        "https://images.unsplash.com/photo-1663246544984-2730f63628b4?q=80&w=687&auto=format&fit=crop",
                    )?,
                ],
            },
            Facet {
                segment: SegmentId::new(23),
                title: "Spiritual Self".into(),
                subtitle: None,
                description: "The core of our subjective experience, encompassing our values, thoughts, and conscience.".into(),
                tone: Tone::Blue,
                details: vec![
                    detail(
                        "OPTIMISTIC",
                        "Even in a dark situation, or gloomy nights I try to be positive about my situation..",
                        "https://images.unsplash.com/photo-1572955995017-e769428eb228?q=80&w=1738&auto=format&fit=crop",
                    )?,
                    detail(
                        "PERSISTENT",
                        "I try to go through and resolve my problems as much as I could, I'll always find a way..",
                        "https://images.unsplash.com/photo-1762328542960-26ea0b7f0309?q=80&w=735&auto=format&fit=crop",
                    )?,
                    detail(
                        "KINDNESS",
                        "Giving kindness without expecting in return, especially helping people who are in dire need is one of my traits..",
                        "https://images.unsplash.com/photo-1578357078586-491adf1aa5ba?q=80&w=764&auto=format&fit=crop",
                    )?,
                ],
            },
        ],
    })
}

fn physical_page() -> Result<SectionPage, Error> {
    Ok(SectionPage {
        path: SectionId::new(PHYSICAL_PATH)?,
        title: "The Physical Self".into(),
        epigraph: Some("Take care of your body. It's the only place you have to live.".into()),
        facets: vec![
            Facet {
                segment: SegmentId::new(31),
                title: "Vitality".into(),
                subtitle: Some("How I Keep Going".into()),
                description: "Energy comes and goes with how I sleep, eat and move. I try to notice when it drops instead of pushing through blindly..".into(),
                tone: Tone::Green,
                details: Vec::new(),
            },
            Facet {
                segment: SegmentId::new(32),
                title: "Body Image".into(),
                subtitle: Some("How I See Myself".into()),
                description: "I used to compare my frame to others a lot. Now I look for ways to improve it rather than simply accepting it and moving on..".into(),
                tone: Tone::Orange,
                details: Vec::new(),
            },
            Facet {
                segment: SegmentId::new(33),
                title: "Limits".into(),
                subtitle: Some("Where I Stop".into()),
                description: "Knowing where my limits are keeps training honest. Rest is part of the routine, not a break from it..".into(),
                tone: Tone::Blue,
                details: Vec::new(),
            },
        ],
    })
}

fn sexual_page() -> Result<SectionPage, Error> {
    Ok(SectionPage {
        path: SectionId::new(SEXUAL_PATH)?,
        title: "My Sexual Self".into(),
        epigraph: None,
        facets: vec![
            Facet {
                segment: SegmentId::new(41),
                title: "Foundation".into(),
                subtitle: Some("My Sexual Self's Starting Point".into()),
                description: "My foundation grew up of the Christian values as well as being able to have a glimpse towards Roman Catholicism, I've been able to experience both and seen both that they align with the same virtues and they don't stray far away from marrying of the opposite sex and grow a family..".into(),
                tone: Tone::Blue,
                details: Vec::new(),
            },
            Facet {
                segment: SegmentId::new(42),
                title: "Environment".into(),
                subtitle: Some("Constant Environment & Encounters".into()),
                description: "I live in a house that has other sexual orientations other than only being straightlaced, I have friends whom also are of the same. This exposed me to other variety of perceptions and how people comprehend who they are..".into(),
                tone: Tone::Purple,
                details: Vec::new(),
            },
            Facet {
                segment: SegmentId::new(43),
                title: "Embracement".into(),
                subtitle: Some("My Conclusion".into()),
                description: "I've solidified my own virtues through various experiences. I've seen myself only attracted of the opposite gender while also having the mindset that having exposed me through your typical simple get married and have a family lifestyle, I believe it suits me most and that I've endowed myself to this mindset as well. To live a simple life..".into(),
                tone: Tone::Green,
                details: Vec::new(),
            },
        ],
    })
}

fn reflection_scenes() -> Result<Vec<Scene>, Error> {
    let raw = [
        (
            "https://images.unsplash.com/photo-1739733901467-ed70da263604?q=80&w=2070",
            "You now have finished reading the pieces and self-reflections that Ian made throughout this entire building process of making his own self of sense website..",
            "SYSTEM AI",
        ),
        (
            "https://images.unsplash.com/photo-1498673394965-85cb14905c89?q=80&w=2070",
            "Hello! If you're reading this you've finished reading all the selves that I have built up from the start and till now, I'm still on an adventure exploring more things to indulge, enjoy and spend time on. This reflections that I'll be showing are what symbolizes the current me..",
            "IAN",
        ),
        (
            "https://images.unsplash.com/photo-1766390700609-5c437e7bc638?q=80&w=2070",
            "I've realized that my physical self, my sexual self looks very contradicting from the other 2 selves, you may ask. But this actually symbolizes on how simple I want to be. If there are things I agree on my self like the sexual one, I think about other things to improve my other aspects on, as well as for the physical self where I try to find ways to improve myself and not just plain acceptance and moving on...",
            "IAN",
        ),
        (
            "https://images.unsplash.com/photo-1639976519431-d04370623ee5?q=80&w=2070",
            "Creating this website has shown me more things and deep actualizations of myself that I need to focus on. The most impactful self that I currently am facing right now is my sexual self, this self of mine has encouraged me more to step up and be better not just for myself but also for my current partner..",
            "IAN",
        ),
        (
            "https://images.unsplash.com/photo-1702424616004-ed0aeab3d432?q=80&w=2070",
            "Finalizing and finishing this, polishing and trying to make my narrative and flow of things lead all up to this. Has made me realize that it's actually fun to create projects like this where I focus on myself instead of trying to seek materialistic achievements that I can gain from it. It helped me lessen my worries and stress from the pressure of currently being an adult..",
            "IAN",
        ),
    ];

    raw.iter()
        .zip(1_u32..)
        .map(|((image, text, speaker), id)| {
            Ok(Scene::new(SceneId::new(id), media(image)?, *text, *speaker)?)
        })
        .collect()
}
