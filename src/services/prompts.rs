// SPDX-License-Identifier: MIT

//! Prompt templates for the generator and checker models.
//!
//! The generator template asks for four tagged sections (code-file,
//! explanation, dependencies, metadata) so the extraction layer can pull the
//! page source and its JSON metadata out of the raw completion. The checker
//! template constrains the model to answer either `NEW` or `FOUND:<id>`.

use crate::models::AlgorithmSummary;

/// Golden reference component the generator is told to match. A compact
/// binary-search page demonstrating the required structure: state-driven
/// visualization, control bar, narration hooks, Tailwind styling.
const GOLDEN_EXAMPLE: &str = r#"import React, { useState, useEffect } from 'react';
import { Play, Pause, StepForward, StepBack, RotateCcw, Volume2, VolumeX } from 'lucide-react';

const BinarySearch = () => {
  const [array, setArray] = useState([2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
  const [target, setTarget] = useState(12);
  const [steps, setSteps] = useState([]);
  const [stepIndex, setStepIndex] = useState(0);
  const [isPlaying, setIsPlaying] = useState(false);
  const [speed, setSpeed] = useState(1000);
  const [voiceEnabled, setVoiceEnabled] = useState(false);

  useEffect(() => {
    const newSteps = [];
    let low = 0, high = array.length - 1;
    while (low <= high) {
      const mid = Math.floor((low + high) / 2);
      newSteps.push({ low, high, mid, explanation: `Checking index ${mid} (value ${array[mid]})` });
      if (array[mid] === target) break;
      if (array[mid] < target) low = mid + 1; else high = mid - 1;
    }
    setSteps(newSteps);
    setStepIndex(0);
  }, [array, target]);

  useEffect(() => {
    if (!isPlaying) return;
    const timer = setInterval(() => {
      setStepIndex((i) => (i < steps.length - 1 ? i + 1 : (setIsPlaying(false), i)));
    }, speed);
    return () => clearInterval(timer);
  }, [isPlaying, speed, steps]);

  const narrate = (text) => {
    if (!voiceEnabled || !window.speechSynthesis) return;
    window.speechSynthesis.cancel();
    window.speechSynthesis.speak(new SpeechSynthesisUtterance(text));
  };

  useEffect(() => {
    if (steps[stepIndex]) narrate(steps[stepIndex].explanation);
  }, [stepIndex]);

  const current = steps[stepIndex] || {};

  return (
    <div className="max-w-4xl mx-auto p-6">
      <h1 className="text-3xl font-bold mb-4 animate-fade-in">Binary Search Visualizer</h1>
      <div className="flex flex-wrap justify-center gap-2 min-h-[120px] items-end p-4 bg-gray-100 dark:bg-gray-900/50 rounded-lg">
        {array.map((value, index) => (
          <div
            key={index}
            className={`flex flex-col items-center p-1 rounded-t-md transition-all duration-500 ${
              index === current.mid ? 'bg-yellow-400' :
              index >= current.low && index <= current.high ? 'bg-blue-400' : 'bg-gray-300'
            }`}
            style={{ height: `${value * 4 + 40}px`, width: '44px' }}
          >
            <span className="font-bold text-sm">{value}</span>
            <span className="text-xs font-mono">[{index}]</span>
          </div>
        ))}
      </div>
      <div className="flex items-center gap-3 mt-4">
        <button onClick={() => setStepIndex((i) => Math.max(i - 1, 0))} aria-label="Step back"><StepBack /></button>
        <button onClick={() => setIsPlaying(!isPlaying)} aria-label={isPlaying ? 'Pause' : 'Play'}>
          {isPlaying ? <Pause /> : <Play />}
        </button>
        <button onClick={() => setStepIndex((i) => Math.min(i + 1, steps.length - 1))} aria-label="Step forward"><StepForward /></button>
        <button onClick={() => { setStepIndex(0); setIsPlaying(false); }} aria-label="Reset"><RotateCcw /></button>
        <button onClick={() => setVoiceEnabled(!voiceEnabled)} aria-label="Toggle narration">
          {voiceEnabled ? <VolumeX /> : <Volume2 />}
        </button>
        <input type="range" min="100" max="1900" value={2000 - speed}
          onChange={(e) => setSpeed(2000 - Number(e.target.value))} aria-label="Speed" />
      </div>
      <div className="bg-blue-50 dark:bg-blue-900/50 p-4 rounded-lg border border-blue-200 mt-6 min-h-[80px]">
        <h3 className="font-bold text-lg mb-2">Current Step:</h3>
        <div>{current.explanation || 'Press play to start.'}</div>
      </div>
    </div>
  );
};

export default BinarySearch;"#;

/// Generator instruction template. `{algorithm}` is substituted with the
/// requested algorithm name.
const GENERATOR_TEMPLATE: &str = r#"
You are AlgoVerse — an elite AI tutor who generates *production-ready, error-free React pages* that are fully functional and styled using Tailwind CSS.

Your mission: produce an *interactive, narrated learning experience* for the algorithm: {algorithm}.

## Golden Reference — Never Deviate
Below is a *Binary Search component* example that demonstrates the exact structure, style, libraries, and quality you must match for ALL outputs.

<golden-example>
{golden_example}
</golden-example>

## Hard Requirements
- **Output exactly one <code-file name="{algorithm}.jsx">...</code-file> block** containing the full React component.
- Must run instantly in Create React App with Tailwind CSS and lucide-react.
- Absolutely no errors or placeholders — fully functional code only.
- Follow the *Binary Search golden example* exactly for:
  - Component structure
  - Voice narration system (SpeechSynthesis API)
  - Lucide icons for controls
  - Tailwind classes with optional Dark Mode and responsive layout
  - Control bar features (play/pause, step, reset, speed)
  - Input validation and error boxes
  - Animations and step highlighting
- Include fade-in header, animated visualization, narrated explanations, and tips section.
- Must be a **self-contained .jsx file** — no external files.
- All accessibility rules from the golden example (aria-labels, keyboard navigable) must be included.

## Output Structure
1. <code-file name="{algorithm}.jsx"> — JSX code here — </code-file>
2. <explanation> — 2-3 sentences explaining what the page does and how to run it. </explanation>
3. <dependencies> — List: "react", "react-dom", "lucide-react", "tailwindcss". </dependencies>
4. <metadata> — JSON object with these keys and example values:
   {
      "title": "algorithm_title",
      "slug": "algorithm_slug",
      "description": "short_description_of_algorithm",
      "category": "algorithm_category",
      "difficulty": "difficulty_level(Beginner/Intermediate/Advanced)",
      "path": "/algorithms/{algorithm}",
      "externalUrl": null,
      "practiceProblems": [{"platform": "...", "url": "...", "description": "...", "difficulty": "..."}]
   } </metadata>

Make sure the JSON is valid and well-formatted with double quotes, no trailing commas.

Now, generate the {algorithm} page with *the same quality, tone, and polish as the golden example*, including the metadata JSON as specified.
"#;

/// Format the generator prompt for a requested algorithm name.
pub fn generator_prompt(algorithm: &str) -> String {
    GENERATOR_TEMPLATE
        .replace("{golden_example}", GOLDEN_EXAMPLE)
        .replace("{algorithm}", algorithm)
}

/// Format the checker prompt: candidate name plus a flattened catalog listing.
pub fn checker_prompt(candidate: &str, catalog: &[AlgorithmSummary]) -> String {
    let listing = if catalog.is_empty() {
        "(the catalog is empty)".to_string()
    } else {
        catalog
            .iter()
            .map(|a| {
                format!(
                    "- id: {} | title: {} | slug: {} | description: {}",
                    a.id, a.title, a.slug, a.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You maintain the catalog of algorithm teaching pages listed below.

Existing algorithms:
{listing}

A user asked for: "{candidate}"

Decide whether this request is the same algorithm concept as one already in the catalog (ignore spelling, casing and small wording differences).

Answer with EXACTLY one of:
- NEW
- FOUND:<id>

where <id> is the id of the matching catalog entry. Output nothing else."#
    )
}
