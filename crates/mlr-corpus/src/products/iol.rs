//! Trifocal intraocular lens — approved claim set.

use super::ProductProfile;

pub(crate) const PRODUCT_NAME: &str = "Clareon PanOptix IOL";

pub(crate) fn profile() -> ProductProfile {
    ProductProfile {
        description: "Clareon PanOptix IOL is a trifocal intraocular lens designed \
            to provide clear vision at near, intermediate, and far distances for \
            patients undergoing cataract surgery."
            .to_string(),
        approved_claims: vec![
            // Vision range & clarity
            "20/20 Near, Intermediate, and Distance Vision is now possible † Based \
             on mean value of binocular defocus curve at near, intermediate, and \
             distance at 6 months (n=127). ‡ Snellen VA was converted from logMAR \
             VA. A Snellen notation of 20/20-2 or better indicates a logMAR VA of \
             0.04 or better, which means 3 or more of the 5 Early Treatment \
             Diabetic Retinopathy Study chart letters in the line were identified \
             correctly."
                .to_string(),
            "The latest advancements in lens technology enable the Clareon® \
             PanOptix® IOL to deliver a full range of vision and exceptional \
             clarity."
                .to_string(),
            // Optical technology
            "ENLIGHTEN® Optical Technology—a proprietary design that optimizes \
             intermediate vision without compromising exceptional near and \
             distance vision."
                .to_string(),
            // Light utilization
            "Optimized light energy distribution — 88% total light utilization at \
             a 3 mm pupil size (Light allocation: 50% distance, 25% intermediate, \
             25% near)."
                .to_string(),
            "Reduces dependence on pupil size with a 4.5 mm diffractive zone.".to_string(),
            // Patient satisfaction
            "Patients love their results with the Clareon® PanOptix® IOL.".to_string(),
            "Enjoy a Full Range of Vision and Exceptional Clarity Without Glasses. \
             * Based on in vitro examinations of glistenings, surface haze and \
             SSNGs."
                .to_string(),
            // Presbyopia correction
            "The Clareon® PanOptix® lens mitigates the effects of presbyopia by \
             providing improved intermediate and near visual acuity, while \
             maintaining comparable distance visual acuity with a reduced need \
             for eyeglasses, compared to a monofocal IOL."
                .to_string(),
            // Continuous focus range
            "More comfortable intermediate vision at 60 cm.".to_string(),
            "A continuous range of vision from distance to near up to 33 cm. \
             *Based on data for AcrySof IQ PanOptix Trifocal IOL."
                .to_string(),
        ],
    }
}
