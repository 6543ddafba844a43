//! Monthly water-gradient contact lens — approved claim set.

use super::ProductProfile;

pub(crate) const PRODUCT_NAME: &str = "Total 30 Contact Lens";

pub(crate) fn profile() -> ProductProfile {
    ProductProfile {
        description: "Total 30 Contact Lens is a monthly disposable contact lens \
            with water gradient technology for extended comfort and clear vision."
            .to_string(),
        approved_claims: vec![
            // Comfort & water gradient
            "TOTAL30® contact lenses that feel like nothing, even at day 30. In a \
             clinical study wherein patients (n=66) used CLEAR CARE solution for \
             nightly cleaning, disinfecting, and storing; Alcon data on file, 2021."
                .to_string(),
            "The first and only monthly replacement Water Gradient contact lenses. \
             Surface property analysis of lehfilcon A lenses out of pack and after \
             30 days of wear; Alcon data on file, 2021."
                .to_string(),
            // Water content & softness
            "TOTAL30® contact lenses feature a gradual transition in water content, \
             from 55% at the core to nearly 100% water at the outermost surface. \
             1. In vitro analysis of lens oxygen permeability, water content, and \
             surface imaging; Alcon data on file, 2021. 2. In vitro analysis of \
             lehfilcon A contact lenses outermost surface softness and correlation \
             with water content; Alcon data on file, 2021."
                .to_string(),
            "Water Gradient Technology in TOTAL30 contact lenses lasts for a full \
             30 days. 1. Surface property analysis of lehfilcon A lenses out of \
             pack and after 30 days of wear; Alcon data on file, 2021. 2. Surface \
             observations of lehfilcon A contact lens and human cornea using \
             scanning transmissions electron microscopy; Alcon data on file, 2021."
                .to_string(),
            // Cleanliness & deposit resistance
            "CELLIGENT® Technology creates a dynamic lens surface that biomimics \
             the corneal surface. 1. Shi X, Cantu-Crouch D, Sharma V, et al. \
             Surface characterization of a silicone hydrogel contact lens having \
             bioinspired 2-methacryloyloxyethyl phosphorylcholine polymer layer in \
             hydrated state. Colloids Surf B: Biointerfaces. March 2021;199:111539. \
             2. Surface observations of lehfilcon A contact lens and human cornea \
             using scanning transmissions electron microscopy; Alcon data on file, \
             2021."
                .to_string(),
            "Helps resist the adherence of bacteria and lipids for a clean lens. \
             In vitro evaluation of bacterial biofilm in commercial lenses; Alcon \
             data on file, 2020."
                .to_string(),
            // Softness & lubricity vs. competitors
            "Water Gradient delivers superior softness and superior lubricity vs. \
             leading reusable lenses. 1. Laboratory analysis of surface modulus of \
             lehfilcon A and commercial lenses using atomic force microscope; \
             Alcon data on file, 2021. 2. Surface lubricity testing of lehfilcon A \
             and commercial lenses using nano-tribometer; Alcon data on file, 2021."
                .to_string(),
            // UV protection
            "Class 1 UV Blocking delivers the highest level of UV protection \
             available in a monthly replacement lens. Laboratory assessment of \
             ultraviolet and visible light transmission properties of lehfilcon A \
             contact lenses using spectrophotometer; Alcon data on file, 2020."
                .to_string(),
            "The first and only monthly replacement Water Gradient toric contact \
             lenses. 1. Shi X, Cantu-Crouch D, Sharma V, et al. Surface \
             characterization of a silicone hydrogel contact lens having \
             bioinspired 2-methacryloyloxyethyl phosphorylcholine polymer layer in \
             hydrated state. Colloids Surf B: Biointerfaces. March 2021;199:111539. \
             2. Surface property analysis of lehfilcon A lenses out of pack and \
             after 30 days of wear; Alcon data on file, 2021. 3. Surface \
             observations of lehfilcon A contact lens and human cornea using \
             scanning transmissions electron microscopy; Alcon data on file, 2021."
                .to_string(),
            // Breakthrough positioning
            "TOTAL30 delivers the only Water Gradient, reusable lens that is \
             clinically shown to feel like nothing, even on day 30. In a clinical \
             study wherein patients (n=66) used CLEAR CARE solution for nightly \
             cleaning, disinfecting, and storing; Alcon data on file, 2021."
                .to_string(),
        ],
    }
}
