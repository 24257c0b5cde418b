//! Per-skill learning recommendations and gap descriptions.

/// Ordered resource list for a skill. Unknown skills get generic study advice.
#[must_use]
pub fn skill_resources(skill: &str) -> Vec<String> {
    let known: Option<&[&str]> = match skill.trim() {
        "HTML" => Some(&[
            "Practice semantic HTML5 elements and ARIA attributes",
            "Build accessible forms and complex layouts",
            "Study HTML best practices and SEO optimization",
            "Create projects focusing on web standards compliance",
        ]),
        "CSS" => Some(&[
            "Master CSS Grid and Flexbox layouts",
            "Learn CSS animations and transitions",
            "Practice responsive design patterns",
            "Explore CSS architecture (BEM, CSS Modules)",
            "Study performance optimization techniques",
        ]),
        "JavaScript" => Some(&[
            "Deep dive into ES6+ features and async programming",
            "Master closures, prototypes, and this context",
            "Practice algorithmic thinking and problem-solving",
            "Build projects using modern JavaScript patterns",
            "Learn testing with Jest or similar frameworks",
        ]),
        "React" => Some(&[
            "Master React hooks (useState, useEffect, useContext, custom hooks)",
            "Practice component composition and reusability",
            "Learn React performance optimization (memo, useMemo, useCallback)",
            "Build complex applications with routing and state management",
            "Study React best practices and design patterns",
        ]),
        "Next.js" => Some(&[
            "Learn SSR vs SSG and when to use each",
            "Master Next.js routing and API routes",
            "Practice image optimization and SEO",
            "Deploy Next.js applications to production",
            "Study Next.js 13+ features (App Router, Server Components)",
        ]),
        "Git Basics" => Some(&[
            "Practice branching strategies (Git Flow, trunk-based)",
            "Master rebasing and interactive rebasing",
            "Learn to resolve complex merge conflicts",
            "Practice code review workflows",
            "Study advanced Git commands and workflows",
        ]),
        "Debugging Skills" => Some(&[
            "Master browser DevTools (Console, Network, Performance)",
            "Practice debugging React components and state",
            "Learn source map debugging",
            "Study common bug patterns and prevention",
            "Use debugging tools like React DevTools",
        ]),
        "API Integration" => Some(&[
            "Practice RESTful API design and consumption",
            "Master error handling and loading states",
            "Learn authentication patterns (JWT, OAuth)",
            "Study API rate limiting and caching strategies",
            "Build projects with complex API integrations",
        ]),
        "State Management (Redux/Zustand)" => Some(&[
            "Learn Redux Toolkit for modern Redux development",
            "Practice Zustand for lightweight state management",
            "Master async actions and middleware",
            "Study state management patterns and best practices",
            "Build applications requiring complex state logic",
        ]),
        "Performance Optimization" => Some(&[
            "Learn to use Chrome Lighthouse and Performance tab",
            "Master code splitting and lazy loading",
            "Practice React.memo and useMemo optimization",
            "Study bundle size optimization techniques",
            "Learn about Web Vitals and Core Web Vitals",
        ]),
        _ => None,
    };

    known.map_or_else(
        || {
            vec![
                format!("Study {skill} fundamentals"),
                format!("Practice {skill} through projects"),
                format!("Take online courses on {skill}"),
                format!("Join communities focused on {skill}"),
            ]
        },
        |items| items.iter().map(|s| (*s).to_string()).collect(),
    )
}

/// Recommendations sized to the gap.
///
/// `gap <= 0` gets a single maintenance line; otherwise the first 2, 3, or 4
/// resources at cut points 1.5 and 2.5.
#[must_use]
pub fn recommendations(skill: &str, gap_score: f64) -> Vec<String> {
    if gap_score <= 0.0 {
        return vec![format!("Continue practicing {skill} to maintain expertise")];
    }
    let take = if gap_score < 1.5 {
        2
    } else if gap_score < 2.5 {
        3
    } else {
        4
    };
    skill_resources(skill).into_iter().take(take).collect()
}

/// Human-readable band for a gap score, cut at 0, 1, 2, and 3.
#[must_use]
pub fn describe_gap(gap_score: f64) -> &'static str {
    if gap_score <= 0.0 {
        "On track or exceeding expectations"
    } else if gap_score < 1.0 {
        "Minor gap — almost there"
    } else if gap_score < 2.0 {
        "Moderate gap — needs focused improvement"
    } else if gap_score < 3.0 {
        "Significant gap — requires dedicated learning"
    } else {
        "Major gap — fundamental skills needed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-2.0, 1)]
    #[case(0.0, 1)]
    #[case(1.0, 2)]
    #[case(1.49, 2)]
    #[case(1.5, 3)]
    #[case(2.0, 3)]
    #[case(2.5, 4)]
    #[case(4.0, 4)]
    fn recommendation_count_follows_gap(#[case] gap: f64, #[case] expected: usize) {
        assert_eq!(recommendations("React", gap).len(), expected);
    }

    #[test]
    fn on_track_gets_maintenance_line() {
        assert_eq!(
            recommendations("CSS", 0.0),
            vec!["Continue practicing CSS to maintain expertise".to_string()]
        );
    }

    #[test]
    fn unknown_skill_gets_generic_advice() {
        let recs = recommendations("Rust", 4.0);
        assert_eq!(recs[0], "Study Rust fundamentals");
        assert_eq!(recs[3], "Join communities focused on Rust");
    }

    #[test]
    fn html_has_four_resources() {
        assert_eq!(skill_resources("HTML").len(), 4);
        assert_eq!(skill_resources("Next.js").len(), 5);
    }

    #[rstest]
    #[case(-1.0, "On track or exceeding expectations")]
    #[case(0.5, "Minor gap — almost there")]
    #[case(1.0, "Moderate gap — needs focused improvement")]
    #[case(2.0, "Significant gap — requires dedicated learning")]
    #[case(3.0, "Major gap — fundamental skills needed")]
    #[case(4.0, "Major gap — fundamental skills needed")]
    fn gap_bands(#[case] gap: f64, #[case] expected: &str) {
        assert_eq!(describe_gap(gap), expected);
    }
}
