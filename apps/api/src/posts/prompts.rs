// All LLM prompt text for the Posts module.
// Voice templates are assembled once into the template table (templates.rs):
// voice instructions, then OUTPUT_FORMAT_RULES, then the voice's marker sentence.
// The request block is inserted immediately before the marker.

pub const STORYTELLING_INSTRUCTIONS: &str = r#"VOICE: STORYTELLING

You turn a real moment from the author's life or career into a post that
earns attention through honesty, not hype. The reader should feel they were
in the room.

FRAMEWORKS:
- BAB (Before-After-Bridge): open in the "before" state with a concrete
  detail, show the "after", then bridge with what changed and why it matters
  to the reader.
- Hero (Hero's Journey): the author starts ordinary, meets a challenge,
  struggles, finds help or insight, and returns changed. Keep the author
  human, never heroic.
- Mountain: build tension through rising obstacles to a single peak moment,
  then resolve quickly with the lesson.

RULES:
- First line is a hook under 12 words. No questions as hooks.
- Use short paragraphs of 1-2 sentences and plenty of white space.
- Use only details from YOUR STORY. Do not invent names, numbers or places.
- End with one reflective line and, optionally, a soft question."#;

pub const AUTHORITY_INSTRUCTIONS: &str = r#"VOICE: AUTHORITY

You turn the author's insight into a post that demonstrates expertise by
teaching, not by listing credentials.

FRAMEWORKS:
- PAS (Problem-Agitate-Solve): name a specific problem the audience has,
  make the cost of ignoring it vivid, then give the author's solution.
- Thesis (Thesis-Antithesis-Synthesis): state the common belief, challenge
  it with the author's counterpoint, and land on a synthesis that is more
  useful than either.
- 4Ps (Picture-Promise-Proof-Push): paint the desired outcome, promise a way
  there, prove it with the author's own evidence, push the reader to act.

RULES:
- First line is a clear, confident claim.
- Make the insight concrete: use steps, numbers or examples from
  YOUR INSIGHT only.
- No buzzwords ("synergy", "leverage", "game-changer").
- End with a practical takeaway the reader can use today."#;

pub const RELEVANCE_INSTRUCTIONS: &str = r#"VOICE: RELEVANCE

You connect the author to what the audience is thinking about right now, so
the post feels timely and worth engaging with.

FRAMEWORKS:
- Myth (Myth vs. Reality): state the myth plainly, then dismantle it with
  the reality the author has observed.
- Trend (Trend Analysis): describe the trend, explain what is driving it and
  what it means for the reader in the next 6-12 months.
- AMA (Ask Me Anything): introduce the author's area of experience around
  the TOPIC and invite specific questions, seeding two or three examples.

RULES:
- First line names the myth, trend or topic directly.
- Take a position. Do not hedge every sentence.
- Ground every claim in the TOPIC provided; do not cite statistics the user
  did not give.
- End with a question that invites informed disagreement."#;

pub const INVITATION_INSTRUCTIONS: &str = r#"VOICE: INVITATION

You write posts whose main job is to start a conversation and make the
reader feel welcome to join it.

FRAMEWORKS:
- Question (The Genuine Question): share the context behind a question the
  author honestly wants answered, then ask it.
- Understand (Help Me Understand): describe what the author has observed,
  admit what they do not understand, and ask the audience to explain.
- Gift (Resource/Gift Frame): offer something useful for free, explain who
  it is for, and make it easy to ask for.
- Celebrate (Celebration/Recognition): recognise a person, team or milestone
  specifically and invite others to add their own recognition.

RULES:
- First line makes the invitation or the subject obvious.
- Keep the author's ego out of it; the reader is the focus.
- Use only the details given in FOCUS.
- End with a single, easy-to-answer call to respond."#;

/// Section rules shared by every voice. The parser depends on these headings.
pub const OUTPUT_FORMAT_RULES: &str = r#"OUTPUT FORMAT:
Respond with exactly these five sections, in this order, each heading on its
own line followed by a colon. Do not add any other text.

TITLE:
A short internal title for the post (not shown on LinkedIn).

POST:
The full LinkedIn post, ready to paste. Respect the WORD COUNT within 10%.
Write in the requested TONE and follow the requested FRAMEWORK exactly.

HASHTAGS:
3 to 5 relevant hashtags on one line.

ENGAGEMENT PREDICTION:
One or two sentences predicting how the audience will respond and why.

QUALITY CHECK:
A short checklist confirming the hook, framework, tone, word count and that
no facts were invented."#;

pub const STORYTELLING_MARKER: &str = "Now write the storytelling post using the inputs above.";
pub const AUTHORITY_MARKER: &str = "Now write the authority post using the inputs above.";
pub const RELEVANCE_MARKER: &str = "Now write the relevance post using the inputs above.";
pub const INVITATION_MARKER: &str = "Now write the invitation post using the inputs above.";

/// Refinement prompt template.
/// Replace: {initial_post}, {refinement_instructions}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"You have already written the LinkedIn post below. The author wants it refined according to their instructions.

Apply the instructions and keep everything else about the post (voice, facts, structure) unless the instructions say otherwise. Return ONLY the refined post text: no headings, no commentary, no quotation marks around it.

INITIAL POST:
{initial_post}

REFINEMENT INSTRUCTIONS:
{refinement_instructions}

REFINED POST:"#;
